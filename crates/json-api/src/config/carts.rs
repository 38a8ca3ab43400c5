//! Cart Config

use std::time::Duration;

use clap::Args;

use storefront_app::{context::CartStoreBackend, domain::carts::stores::DEFAULT_SESSION_TTL};

/// Where carts live between requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CartStoreKind {
    /// In process memory, lost on restart.
    Session,

    /// In Postgres alongside the catalog.
    Database,
}

/// Cart settings.
#[derive(Debug, Args)]
pub struct CartConfig {
    /// Cart storage backend (session, database)
    #[arg(long, env = "CART_STORE", value_enum, default_value_t = CartStoreKind::Session)]
    pub cart_store: CartStoreKind,

    /// Idle lifetime of session carts, in seconds.
    #[arg(
        long,
        env = "CART_SESSION_TTL_SECONDS",
        default_value_t = DEFAULT_SESSION_TTL.as_secs()
    )]
    pub cart_session_ttl_seconds: u64,

    /// ISO 4217 code used when formatting cart totals.
    #[arg(long, env = "STORE_CURRENCY", default_value = "GBP")]
    pub store_currency: String,
}

impl CartConfig {
    /// The cart store the application context should be built with.
    #[must_use]
    pub fn backend(&self) -> CartStoreBackend {
        match self.cart_store {
            CartStoreKind::Session => CartStoreBackend::Session {
                ttl: Duration::from_secs(self.cart_session_ttl_seconds),
            },
            CartStoreKind::Database => CartStoreBackend::Database,
        }
    }
}
