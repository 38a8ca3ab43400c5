//! Catalog Products

mod handlers;

pub(crate) use handlers::*;
