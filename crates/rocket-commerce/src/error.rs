//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in cart and catalog operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// A second line for a product already in the cart.
    #[error("Product already in cart: {0}")]
    DuplicateItem(ProductId),

    /// Insufficient stock for the requested amount.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
}
