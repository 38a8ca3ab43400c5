//! App Router

use salvo::Router;

use crate::{carts, catalog, products, session};

pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("catalog")
                .push(
                    Router::with_path("categories")
                        .get(catalog::categories::index::handler)
                        .push(
                            Router::with_path("{category}")
                                .get(catalog::categories::get::handler)
                                .push(
                                    Router::with_path("products")
                                        .get(catalog::categories::products::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("products")
                        .get(catalog::products::index::handler)
                        .push(
                            Router::with_path("{product}").get(catalog::products::get::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("cart")
                .hoop(session::cart_session)
                .get(carts::get::handler)
                .delete(carts::empty::handler)
                .push(Router::with_path("checkout").post(carts::checkout::handler))
                .push(
                    Router::with_path("items")
                        .post(carts::items::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .put(carts::items::update::handler)
                                .delete(carts::items::delete::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use salvo::{
        affix_state::inject,
        http::StatusCode,
        prelude::Service,
        test::{ResponseExt, TestClient},
    };
    use serde_json::Value;
    use testresult::TestResult;

    use storefront_app::domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartContextUuid},
        },
        categories::MockCategoriesService,
    };

    use crate::{session::CART_COOKIE, test_helpers::Mocks};

    use super::*;

    fn make_service(mocks: Mocks) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(mocks.into_state()))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_cart_routes_run_behind_the_session_cookie() -> TestResult {
        let seen = Arc::new(Mutex::new(None::<CartContextUuid>));
        let recorded = Arc::clone(&seen);

        let mut carts = MockCartsService::new();

        carts.expect_get_cart().once().returning(move |context| {
            if let Ok(mut slot) = recorded.lock() {
                *slot = Some(context);
            }

            Ok(Cart::new())
        });

        let res = TestClient::get("http://example.com/cart")
            .send(&make_service(Mocks {
                carts,
                ..Mocks::default()
            }))
            .await;

        let cookie = res.cookie(CART_COOKIE).map(|cookie| cookie.value().to_string());
        let context = seen.lock().ok().and_then(|slot| *slot);

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(cookie, context.map(|context| context.to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn test_same_cookie_reaches_the_same_cart() -> TestResult {
        let context = CartContextUuid::new();

        let mut carts = MockCartsService::new();

        carts
            .expect_checkout()
            .once()
            .withf(move |c| *c == context)
            .return_once(|_| Ok(Cart::new().summary()));

        let mut res = TestClient::post("http://example.com/cart/checkout")
            .add_header("cookie", format!("{CART_COOKIE}={context}"), true)
            .send(&make_service(Mocks {
                carts,
                ..Mocks::default()
            }))
            .await;

        let body: Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.get("total"), Some(&Value::from(0)));

        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_routes_do_not_issue_cart_cookies() {
        let mut categories = MockCategoriesService::new();

        categories
            .expect_list_categories()
            .once()
            .return_once(|| Ok(Vec::new()));

        let res = TestClient::get("http://example.com/catalog/categories")
            .send(&make_service(Mocks {
                categories,
                ..Mocks::default()
            }))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(res.cookie(CART_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let res = TestClient::get("http://example.com/checkout")
            .send(&make_service(Mocks::default()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
