//! Product response bodies.

use rusty_money::iso::Currency;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::records::ProductRecord;

use crate::money::format_minor;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    /// Display name of the product
    pub model: String,

    /// The price of the product in pence/cents
    pub price: u64,

    /// `price` rendered in the store currency
    pub price_formatted: String,

    /// Category the product is filed under
    pub category: Option<Uuid>,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl ProductResponse {
    pub(crate) fn new(product: ProductRecord, currency: &'static Currency) -> Self {
        ProductResponse {
            uuid: product.uuid.into(),
            price_formatted: format_minor(product.price, currency),
            model: product.model,
            price: product.price,
            category: product.category.map(Into::into),
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }

    pub(crate) fn list(products: Vec<ProductRecord>, currency: &'static Currency) -> Vec<Self> {
        products
            .into_iter()
            .map(|product| Self::new(product, currency))
            .collect()
    }
}
