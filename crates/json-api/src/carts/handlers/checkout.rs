//! Checkout Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    state::State,
};

/// Checkout Handler
///
/// Returns a summary of the cart as it stood and leaves an empty cart behind.
/// No payment, stock or order record is involved.
#[endpoint(
    tags("cart"),
    summary = "Checkout",
    responses(
        (status_code = StatusCode::OK, description = "Checked-out cart summary"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Cart store unavailable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let context = depot.cart_context_or_500()?;

    let summary = state
        .app
        .carts
        .checkout(context)
        .await
        .map_err(into_status_error)?;

    info!(
        cart_context = %context,
        lines = summary.lines.len(),
        total = summary.total,
        "checked out cart"
    );

    Ok(Json(CartResponse::from_summary(&summary, state.currency)))
}
