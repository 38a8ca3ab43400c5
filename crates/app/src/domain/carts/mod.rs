//! Carts

pub mod errors;
pub mod lookup;
pub mod models;
pub mod service;
pub mod store;
pub mod stores;

pub use errors::{CartError, CartsServiceError};
pub use lookup::{MockProductLookup, ProductLookup, ProductLookupError, ProductSnapshot};
pub use service::*;
pub use store::{CartStore, CartStoreError, MockCartStore};
