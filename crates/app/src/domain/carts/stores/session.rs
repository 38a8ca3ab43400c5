//! Session Cart Store

use std::time::{Duration, Instant};

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::carts::{
    models::{Cart, CartContextUuid},
    store::{CartStore, CartStoreError},
};

/// Default idle lifetime of a session cart.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug)]
struct SessionEntry {
    cart: Cart,
    touched_at: Instant,
}

impl SessionEntry {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.touched_at) >= ttl
    }
}

/// Process-local carts that expire after `ttl` without a load or save.
#[derive(Debug)]
pub struct SessionCartStore {
    sessions: RwLock<FxHashMap<CartContextUuid, SessionEntry>>,
    ttl: Duration,
}

impl SessionCartStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(FxHashMap::default()),
            ttl,
        }
    }

    /// Number of sessions currently holding a cart, expired or not.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Reading a live cart counts as activity and restarts its idle clock.
    async fn load_at(&self, context: CartContextUuid, now: Instant) -> Cart {
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(&context) {
            Some(entry) if !entry.is_expired(now, self.ttl) => {
                entry.touched_at = now;

                entry.cart.clone()
            }
            _ => Cart::new(),
        }
    }

    async fn save_at(&self, context: CartContextUuid, cart: Cart, now: Instant) {
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();

        sessions.retain(|_, entry| !entry.is_expired(now, self.ttl));

        let purged = before - sessions.len();

        if purged > 0 {
            debug!(purged, "purged expired session carts");
        }

        if cart.is_empty() {
            sessions.remove(&context);
        } else {
            sessions.insert(
                context,
                SessionEntry {
                    cart,
                    touched_at: now,
                },
            );
        }
    }
}

impl Default for SessionCartStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

#[async_trait]
impl CartStore for SessionCartStore {
    async fn load(&self, context: CartContextUuid) -> Result<Cart, CartStoreError> {
        Ok(self.load_at(context, Instant::now()).await)
    }

    async fn save(&self, context: CartContextUuid, cart: Cart) -> Result<(), CartStoreError> {
        self.save_at(context, cart, Instant::now()).await;

        Ok(())
    }
}
