//! Product lookup used when adding to a cart.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::products::records::ProductUuid;

/// The product fields a cart line freezes at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    pub display_name: String,

    /// Price of one unit, in minor currency units.
    pub unit_price: u64,
}

#[derive(Debug, Error)]
pub enum ProductLookupError {
    #[error("catalog storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ProductLookupError {
    fn from(error: sqlx::Error) -> Self {
        Self::Sql(error)
    }
}

/// Resolves a product to the data a cart line needs. Implementations must be
/// free of side effects.
#[automock]
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Returns `None` when the product does not exist or has been deleted.
    async fn resolve(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductSnapshot>, ProductLookupError>;
}
