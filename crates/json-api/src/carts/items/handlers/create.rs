//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{Error, IgnoredAny, MapAccess, SeqAccess, Visitor},
};
use uuid::Uuid;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    state::State,
};

fn default_quantity() -> i64 {
    1
}

/// Accepts any JSON value for `quantity`. Integers pass through untouched so
/// the service can reject zero or negatives; anything else becomes one.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientQuantity)
}

struct LenientQuantity;

impl<'de> Visitor<'de> for LenientQuantity {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a quantity")
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    // Out-of-range integers stay out of range so the service rejects them.
    fn visit_u64<E: Error>(self, value: u64) -> Result<i64, E> {
        Ok(i64::try_from(value).unwrap_or(i64::MAX))
    }

    fn visit_f64<E: Error>(self, _: f64) -> Result<i64, E> {
        Ok(default_quantity())
    }

    fn visit_bool<E: Error>(self, _: bool) -> Result<i64, E> {
        Ok(default_quantity())
    }

    fn visit_str<E: Error>(self, _: &str) -> Result<i64, E> {
        Ok(default_quantity())
    }

    fn visit_unit<E: Error>(self) -> Result<i64, E> {
        Ok(default_quantity())
    }

    fn visit_none<E: Error>(self) -> Result<i64, E> {
        Ok(default_quantity())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<i64, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}

        Ok(default_quantity())
    }

    fn visit_map<A>(self, mut map: A) -> Result<i64, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}

        Ok(default_quantity())
    }
}

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// Product to add
    pub product: Uuid,

    /// Units to add; defaults to one when absent or not an integer
    #[serde(default = "default_quantity", deserialize_with = "lenient_quantity")]
    pub quantity: i64,
}

/// Add Cart Item Handler
///
/// Adds units of a product, merging with any existing line for it.
#[endpoint(
    tags("cart"),
    summary = "Add Cart Item",
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Invalid quantity"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Cart or catalog unavailable"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.create",
    skip(json, depot, res),
    fields(
        cart_context = tracing::field::Empty,
        product_uuid = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let context = depot.cart_context_or_500()?;
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("cart_context", tracing::field::display(context));
    span.record("product_uuid", tracing::field::display(request.product));
    span.record("quantity", request.quantity);

    let cart = state
        .app
        .carts
        .add_item(context, request.product.into(), request.quantity)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/cart/items/{}", request.product), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CartResponse::from_cart(&cart, state.currency)))
}
