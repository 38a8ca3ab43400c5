//! Cart Stores
//!
//! Two interchangeable [`CartStore`](super::store::CartStore) backends: carts
//! that live only as long as a browser session, and carts kept in Postgres.

mod postgres;
mod session;

pub use postgres::PgCartStore;
pub use session::{DEFAULT_SESSION_TTL, SessionCartStore};
