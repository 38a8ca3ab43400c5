//! Empty Cart Handler

use std::sync::Arc;

use salvo::prelude::*;
use tracing::info;

use crate::{
    carts::{errors::into_status_error, responses::CartResponse},
    extensions::*,
    state::State,
};

/// Empty Cart Handler
///
/// Removes every line and returns the now empty cart.
#[endpoint(
    tags("cart"),
    summary = "Empty Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart emptied"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Cart store unavailable"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let context = depot.cart_context_or_500()?;

    let cart = state
        .app
        .carts
        .empty_cart(context)
        .await
        .map_err(into_status_error)?;

    info!(cart_context = %context, "emptied cart");

    Ok(Json(CartResponse::from_cart(&cart, state.currency)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::{
        CartError, CartStoreError, CartsServiceError, MockCartsService, models::Cart,
    };

    use crate::test_helpers::{Mocks, TEST_CART_CONTEXT, cart_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        cart_service(
            Mocks {
                carts,
                ..Mocks::default()
            },
            Router::with_path("cart").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_empty_cart_returns_empty_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_empty_cart()
            .once()
            .withf(|context| *context == TEST_CART_CONTEXT)
            .return_once(|_| Ok(Cart::new()));

        let mut res = TestClient::delete("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.lines.is_empty());
        assert_eq!(body.total, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_cart_store_failure_returns_503() {
        let mut carts = MockCartsService::new();

        carts.expect_empty_cart().once().return_once(|_| {
            Err(CartsServiceError::StoreUnavailable(CartStoreError::Corrupt(
                CartError::InvalidQuantity(0),
            )))
        });

        let res = TestClient::delete("http://example.com/cart")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));
    }
}
