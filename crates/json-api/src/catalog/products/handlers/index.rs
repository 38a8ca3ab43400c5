//! Catalog Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use storefront_app::domain::categories::records::CategoryUuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductResponse},
    state::State,
};

/// Catalog Product Index Handler
///
/// Lists products, optionally only those filed directly under `category`.
#[endpoint(
    tags("catalog"),
    summary = "Browse Products",
    responses(
        (status_code = StatusCode::OK, description = "Products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Malformed category"),
    ),
)]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = category
        .into_inner()
        .map(|category| category.parse::<CategoryUuid>())
        .transpose()
        .or_400("category must be a UUID")?;

    let products = match category {
        Some(category) => state.app.products.list_products_in_category(category).await,
        None => state.app.products.list_products().await,
    }
    .map_err(into_status_error)?;

    Ok(Json(ProductResponse::list(products, state.currency)))
}
