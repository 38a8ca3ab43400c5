//! Catalog
//!
//! Read-only browsing: the shop page, category pages and product detail.

pub(crate) mod categories;
pub(crate) mod products;
