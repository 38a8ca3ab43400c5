//! Test Helpers

use crate::domain::{
    carts::ProductSnapshot,
    products::{
        ProductsService, ProductsServiceError,
        data::NewProduct,
        records::{ProductRecord, ProductUuid},
    },
};

use super::TestContext;

/// Snapshot with the given name and price, for building carts by hand.
pub(crate) fn snapshot(display_name: &str, unit_price: u64) -> ProductSnapshot {
    ProductSnapshot {
        display_name: display_name.to_string(),
        unit_price,
    }
}

/// Create an uncategorised product.
pub(crate) async fn create_product(
    ctx: &TestContext,
    model: &str,
    price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(NewProduct {
            uuid: ProductUuid::new(),
            model: model.to_string(),
            price,
            category: None,
        })
        .await
}
