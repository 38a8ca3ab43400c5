//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use storefront_app::domain::carts::models::CartContextUuid;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_cart_context(&mut self, context: CartContextUuid);

    /// The cart context placed by the session middleware.
    fn cart_context_or_500(&self) -> Result<CartContextUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_cart_context(&mut self, context: CartContextUuid) {
        self.inject(context);
    }

    fn cart_context_or_500(&self) -> Result<CartContextUuid, StatusError> {
        self.obtain::<CartContextUuid>().copied().map_err(|_ignored| {
            error!("cart session middleware did not run");

            StatusError::internal_server_error()
        })
    }
}
