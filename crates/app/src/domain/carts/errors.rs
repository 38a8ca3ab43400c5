//! Cart errors.

use thiserror::Error;

use crate::domain::{
    carts::{lookup::ProductLookupError, store::CartStoreError},
    products::records::ProductUuid,
};

/// Errors raised by the in-memory cart itself.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("cart already has a line for product {0}")]
    DuplicateLine(ProductUuid),
}

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product not found")]
    ProductNotFound,

    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    #[error("cart storage unavailable")]
    StoreUnavailable(#[source] CartStoreError),

    #[error("product catalog unavailable")]
    CatalogUnavailable(#[source] ProductLookupError),
}

impl From<CartError> for CartsServiceError {
    fn from(error: CartError) -> Self {
        match error {
            CartError::InvalidQuantity(quantity) => Self::InvalidQuantity(quantity),
            CartError::DuplicateLine(_) => Self::StoreUnavailable(CartStoreError::Corrupt(error)),
        }
    }
}

impl From<CartStoreError> for CartsServiceError {
    fn from(error: CartStoreError) -> Self {
        Self::StoreUnavailable(error)
    }
}

impl From<ProductLookupError> for CartsServiceError {
    fn from(error: ProductLookupError) -> Self {
        Self::CatalogUnavailable(error)
    }
}
