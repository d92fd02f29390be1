//! Stock-checked, persisted shopping cart store for RocketShoes.
//!
//! [`CartStore`] owns the shopper's [`Cart`] and exposes three mutations:
//! add a product, remove a product, and set a product's amount. Each one
//! consults the stock service where needed, rewrites persistent storage on
//! success, publishes the new cart to subscribers, and reports the result
//! to the shopper through a [`Notifier`]. Errors never reach the caller.
//!
//! Collaborators are injected, never global:
//!
//! - a [`Store`](rocket_cache::Store) for persistence, wrapped in [`CartStorage`]
//! - a [`CatalogApi`] for stock and product lookups ([`HttpCatalog`] in production)
//! - a [`Notifier`] for toast messages
//!
//! # Example
//!
//! ```rust,ignore
//! use rocket_cart::prelude::*;
//! use rocket_cache::FileStore;
//! use rocket_data::FetchClient;
//!
//! let store = CartStore::new(
//!     CartStorage::new(FileStore::open(".rocket")?),
//!     HttpCatalog::new(FetchClient::new().with_base_url("http://localhost:3333")),
//!     LogNotifier,
//! );
//!
//! store.add_product(ProductId::new(1)).await;
//! store.update_product_amount(UpdateProductAmount::new(ProductId::new(1), 3)).await;
//! store.remove_product(ProductId::new(1));
//! ```

pub mod api;
pub mod error;
pub mod notify;
pub mod storage;
pub mod store;

pub use api::{CatalogApi, HttpCatalog};
pub use error::CartError;
pub use notify::{messages, LogNotifier, Notifier, RecordingNotifier, Toast, ToastKind};
pub use storage::{CartStorage, CART_STORAGE_NAMESPACE};
pub use store::{CartStore, Outcome, UpdateProductAmount};

pub use rocket_commerce::{Cart, CartItem, Product, ProductId, Stock};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CartError, CartStorage, CartStore, CatalogApi, HttpCatalog, LogNotifier, Notifier,
        Outcome, Toast, ToastKind, UpdateProductAmount,
    };
    pub use rocket_commerce::prelude::*;
}
