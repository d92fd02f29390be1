//! Product catalog module.
//!
//! Contains the read-only types served by the products and stock services.

mod inventory;
mod product;

pub use inventory::Stock;
pub use product::Product;
