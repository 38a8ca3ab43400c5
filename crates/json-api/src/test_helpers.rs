//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rusty_money::iso;
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use storefront_app::{
    context::AppContext,
    domain::{
        carts::{
            MockCartsService, ProductSnapshot,
            models::{Cart, CartContextUuid},
        },
        categories::{
            MockCategoriesService,
            records::{CategoryRecord, CategoryUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_CART_CONTEXT: CartContextUuid = CartContextUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_cart_context(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_cart_context(TEST_CART_CONTEXT);
    ctrl.call_next(req, depot, res).await;
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_list_products_in_category().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_categories_mock() -> MockCategoriesService {
    let mut categories = MockCategoriesService::new();

    categories.expect_list_categories().never();
    categories.expect_get_category().never();
    categories.expect_list_categories_below().never();
    categories.expect_create_category().never();
    categories.expect_list_products_below().never();

    categories
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_get_cart().never();
    carts.expect_add_item().never();
    carts.expect_remove_item().never();
    carts.expect_update_quantity().never();
    carts.expect_empty_cart().never();
    carts.expect_checkout().never();

    carts
}

/// Service mocks behind a test [`State`]. Anything left at its default
/// fails the test if called.
pub(crate) struct Mocks {
    pub products: MockProductsService,
    pub categories: MockCategoriesService,
    pub carts: MockCartsService,
}

impl Default for Mocks {
    fn default() -> Self {
        Self {
            products: strict_products_mock(),
            categories: strict_categories_mock(),
            carts: strict_carts_mock(),
        }
    }
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(
            AppContext {
                products: Arc::new(self.products),
                categories: Arc::new(self.categories),
                carts: Arc::new(self.carts),
            },
            iso::GBP,
        )
    }
}

pub(crate) fn service(mocks: Mocks, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(mocks.into_state())).push(route))
}

/// Like [`service`], with [`TEST_CART_CONTEXT`] standing in for the session
/// middleware.
pub(crate) fn cart_service(mocks: Mocks, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(inject_cart_context)
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        Mocks {
            products,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn categories_service(categories: MockCategoriesService, route: Router) -> Service {
    service(
        Mocks {
            categories,
            ..Mocks::default()
        },
        route,
    )
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        model: "Kettle".to_string(),
        price: 2_499,
        category: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_category(uuid: CategoryUuid, name: &str) -> CategoryRecord {
    CategoryRecord {
        uuid,
        name: name.to_string(),
        parent: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A cart holding `quantity` units of one freshly identified product.
pub(crate) fn cart_with(
    display_name: &str,
    unit_price: u64,
    quantity: i64,
) -> Result<(Cart, ProductUuid), storefront_app::domain::carts::CartError> {
    let product = ProductUuid::new();
    let mut cart = Cart::new();

    cart.add(
        product,
        ProductSnapshot {
            display_name: display_name.to_string(),
            unit_price,
        },
        quantity,
    )?;

    Ok((cart, product))
}
