//! Cart persistence contract.

use std::num::TryFromIntError;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::domain::carts::{
    errors::CartError,
    models::{Cart, CartContextUuid},
};

#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("storage error")]
    Sql(#[source] sqlx::Error),

    #[error("stored cart is invalid")]
    Corrupt(#[source] CartError),

    #[error("stored value out of range")]
    OutOfRange(#[from] TryFromIntError),
}

impl From<sqlx::Error> for CartStoreError {
    fn from(error: sqlx::Error) -> Self {
        Self::Sql(error)
    }
}

impl From<CartError> for CartStoreError {
    fn from(error: CartError) -> Self {
        Self::Corrupt(error)
    }
}

/// Loads and saves whole carts by owning context. Carts cross this boundary
/// by value only.
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Load the cart for `context`; a context with no stored cart loads as empty.
    async fn load(&self, context: CartContextUuid) -> Result<Cart, CartStoreError>;

    /// Replace the stored cart for `context`.
    async fn save(&self, context: CartContextUuid, cart: Cart) -> Result<(), CartStoreError>;
}
