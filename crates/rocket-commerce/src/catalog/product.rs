//! Product types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product as returned by the products service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price as published by the catalog.
    pub price: f64,
    /// Image URL.
    pub image: String,
}
