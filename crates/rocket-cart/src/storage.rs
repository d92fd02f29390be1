//! Cart persistence.

use rocket_cache::{cache_key, Cache, CacheError, Store};
use rocket_commerce::Cart;
use std::sync::Arc;
use tracing::{debug, warn};

/// Namespace for storage keys written by the storefront.
pub const CART_STORAGE_NAMESPACE: &str = "@RocketShoes";

/// Reads and writes the cart under a single storage key.
///
/// The whole cart is written on every save. Loading never fails: a missing,
/// unreadable or invalid value yields an empty cart.
#[derive(Clone)]
pub struct CartStorage {
    cache: Arc<Cache<Arc<dyn Store>>>,
    key: String,
}

impl CartStorage {
    /// Use `store` with the default key, `@RocketShoes:cart`.
    pub fn new(store: impl Store + 'static) -> Self {
        let store: Arc<dyn Store> = Arc::new(store);
        Self {
            cache: Arc::new(Cache::new(store)),
            key: cache_key!(CART_STORAGE_NAMESPACE, "cart"),
        }
    }

    /// Override the storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// The storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted cart.
    pub fn load(&self) -> Cart {
        match self.cache.get::<Cart>(&self.key) {
            Ok(Some(cart)) => {
                debug!(key = %self.key, items = cart.len(), "loaded cart");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding unreadable cart");
                Cart::new()
            }
        }
    }

    /// Replace the persisted cart.
    pub fn save(&self, cart: &Cart) -> Result<(), CacheError> {
        self.cache.set(&self.key, cart)
    }
}

impl std::fmt::Debug for CartStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStorage").field("key", &self.key).finish()
    }
}
