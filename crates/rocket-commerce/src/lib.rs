//! Cart and catalog domain types for RocketShoes.
//!
//! This crate holds the pure data model behind the storefront cart:
//!
//! - **Catalog**: products as served by the products service, stock levels
//! - **Cart**: the shopper's selection, one line per product, with quantities
//!
//! Nothing here performs I/O. Stock checks, persistence and notifications
//! live in `rocket-cart`.
//!
//! # Example
//!
//! ```rust
//! use rocket_commerce::prelude::*;
//!
//! let product = Product {
//!     id: ProductId::new(7),
//!     title: "Tênis de Caminhada Leve Confortável".to_string(),
//!     price: 179.9,
//!     image: "https://example.com/tenis.jpg".to_string(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.push_product(product).unwrap();
//! cart.set_amount(ProductId::new(7), 3).unwrap();
//!
//! assert_eq!(cart.total_items(), 3);
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;

pub use cart::{Cart, CartItem};
pub use catalog::{Product, Stock};
pub use error::CommerceError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{Product, Stock};

    // Cart
    pub use crate::cart::{Cart, CartItem};
}
