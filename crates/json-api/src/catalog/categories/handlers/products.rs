//! Category Products Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use storefront_app::pagination::PageRequest;

use crate::{
    catalog::categories::{errors::into_status_error, responses::ProductPageResponse},
    extensions::*,
    products::responses::ProductResponse,
    state::State,
};

/// Category Products Handler
///
/// One page of the products filed under the category or any of its
/// descendants.
#[endpoint(
    tags("catalog"),
    summary = "List Category Products",
    responses(
        (status_code = StatusCode::OK, description = "Page of products"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
    ),
)]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    page: QueryParam<u32, false>,
    per_page: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductPageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = PageRequest::new(page.into_inner(), per_page.into_inner());

    let products = state
        .app
        .categories
        .list_products_below(category.into_inner().into(), request)
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        products
            .map(|product| ProductResponse::new(product, state.currency))
            .into(),
    ))
}
