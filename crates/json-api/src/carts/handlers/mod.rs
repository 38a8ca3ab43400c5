//! Cart Handlers

pub(crate) mod checkout;
pub(crate) mod empty;
pub(crate) mod get;
