//! Type-safe key-value storage for RocketShoes.
//!
//! Provides a small synchronous key-value abstraction with two backends and
//! a typed wrapper that handles JSON serialization.
//!
//! - [`MemoryStore`] keeps values in process memory
//! - [`FileStore`] keeps one file per key under a directory, so values
//!   survive restarts the way browser local storage survives reloads
//!
//! # Example
//!
//! ```rust
//! use rocket_cache::{cache_key, Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct CartItem {
//!     id: i64,
//!     amount: i64,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//! let key = cache_key!("@RocketShoes", "cart");
//!
//! cache.set(&key, &vec![CartItem { id: 1, amount: 2 }]).unwrap();
//!
//! let cart: Option<Vec<CartItem>> = cache.get(&key).unwrap();
//! assert_eq!(cart.unwrap()[0].amount, 2);
//!
//! cache.delete(&key).unwrap();
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, Store};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, MemoryStore, Store};
}
