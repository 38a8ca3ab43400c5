//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// Replacement quantity; `0` removes the line
    pub quantity: i64,
}

/// Update Cart Item Handler
///
/// Replaces the quantity of a line. A product with no line is left alone.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Cart store unavailable"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.update",
    skip(product, json, depot),
    fields(
        cart_context = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let context = depot.cart_context_or_500()?;
    let product = product.into_inner();
    let quantity = json.into_inner().quantity;

    let span = tracing::Span::current();

    span.record("cart_context", tracing::field::display(context));
    span.record("product_uuid", tracing::field::display(product));
    span.record("quantity", quantity);

    let cart = state
        .app
        .carts
        .update_quantity(context, product.into(), quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::from_cart(&cart, state.currency)))
}
