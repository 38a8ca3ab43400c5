//! Catalog-backed product lookup for carts.

use async_trait::async_trait;

use crate::{
    database::Db,
    domain::{
        carts::lookup::{ProductLookup, ProductLookupError, ProductSnapshot},
        products::{records::ProductUuid, repository::PgProductsRepository},
    },
};

/// Resolves cart additions against the live catalog. Deleted products do
/// not resolve.
#[derive(Debug, Clone)]
pub struct PgProductLookup {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductLookup {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductLookup for PgProductLookup {
    async fn resolve(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductSnapshot>, ProductLookupError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.find_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(record.map(|record| ProductSnapshot {
            display_name: record.model,
            unit_price: record.price,
        }))
    }
}
