//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::{
        carts::{
            CartStore, CartsService, StoreCartsService,
            stores::{PgCartStore, SessionCartStore},
        },
        categories::{CategoriesService, PgCategoriesService},
        products::{PgProductLookup, PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

/// Where carts are kept between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartStoreBackend {
    /// In-process, expiring after `ttl` without activity.
    Session { ttl: Duration },

    /// Postgres, surviving restarts.
    Database,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        cart_store: CartStoreBackend,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool), cart_store))
    }

    /// Wire every service over an existing connection pool.
    #[must_use]
    pub fn from_db(db: Db, cart_store: CartStoreBackend) -> Self {
        let store: Arc<dyn CartStore> = match cart_store {
            CartStoreBackend::Session { ttl } => Arc::new(SessionCartStore::new(ttl)),
            CartStoreBackend::Database => Arc::new(PgCartStore::new(db.clone())),
        };

        info!(?cart_store, "configured cart store");

        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            carts: Arc::new(StoreCartsService::new(
                Arc::new(PgProductLookup::new(db)),
                store,
            )),
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
