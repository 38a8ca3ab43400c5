//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the visitor's cart; a new visitor gets an empty one.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Current cart"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Cart store unavailable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let context = depot.cart_context_or_500()?;

    let cart = state
        .app
        .carts
        .get_cart(context)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::from_cart(&cart, state.currency)))
}
