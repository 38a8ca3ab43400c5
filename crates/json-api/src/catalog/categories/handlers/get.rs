//! Get Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    catalog::categories::{
        errors::into_status_error,
        responses::{CategoryResponse, CategoryTreeResponse},
    },
    extensions::*,
    state::State,
};

/// Get Category Handler
///
/// Returns the selected category together with its descendants.
#[endpoint(
    tags("catalog"),
    summary = "Get Category",
    responses(
        (status_code = StatusCode::OK, description = "Category and descendants"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CategoryTreeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let category = category.into_inner().into();

    let selected = state
        .app
        .categories
        .get_category(category)
        .await
        .map_err(into_status_error)?;

    let descendants = state
        .app
        .categories
        .list_categories_below(category)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CategoryTreeResponse {
        category: selected.into(),
        descendants: descendants.into_iter().map(CategoryResponse::from).collect(),
    }))
}
