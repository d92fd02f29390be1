//! Cart store error types.
//!
//! These never escape a [`CartStore`](crate::CartStore) operation; they are
//! classified at the operation boundary and turned into toasts.

use rocket_cache::CacheError;
use rocket_commerce::CommerceError;
use rocket_data::FetchError;
use thiserror::Error;

/// Errors raised inside cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// Stock or products service request failed.
    #[error("Catalog request failed: {0}")]
    Catalog(#[from] FetchError),

    /// Persistent storage could not be written.
    #[error("Storage failed: {0}")]
    Storage(#[from] CacheError),

    /// Cart rule violated (out of stock, item not in cart, ...).
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

impl CartError {
    /// Whether the failure is a stock shortfall the shopper can fix.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(
            self,
            CartError::Commerce(CommerceError::InsufficientStock { .. })
        )
    }
}
