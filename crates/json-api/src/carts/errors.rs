//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::InvalidQuantity(quantity) => StatusError::unprocessable_entity()
            .brief(format!("Invalid quantity {quantity}; expected a positive whole number")),
        CartsServiceError::StoreUnavailable(source) => {
            error!("cart store unavailable: {source}");

            StatusError::service_unavailable().brief("Cart is temporarily unavailable")
        }
        CartsServiceError::CatalogUnavailable(source) => {
            error!("product catalog unavailable: {source}");

            StatusError::service_unavailable().brief("Catalog is temporarily unavailable")
        }
    }
}
