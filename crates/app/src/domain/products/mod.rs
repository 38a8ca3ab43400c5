//! Products

pub mod data;
pub mod errors;
mod lookup;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use lookup::PgProductLookup;
pub use service::*;
