//! Stock level types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Available stock for a product, as reported by the stock service.
///
/// The service includes the product id in its payload, but only `amount`
/// is relied on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    /// Product this entry belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    /// Quantity available for purchase.
    pub amount: i64,
}

impl Stock {
    /// Create a stock entry for a product.
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self {
            id: Some(id),
            amount,
        }
    }

    /// Check if at least one unit is available.
    pub fn is_available(&self) -> bool {
        self.amount > 0
    }

    /// Check if a specific quantity is available.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.amount
    }

    /// Require that `quantity` units of `product_id` are available.
    pub fn ensure(&self, product_id: ProductId, quantity: i64) -> Result<(), CommerceError> {
        if self.can_fulfill(quantity) {
            Ok(())
        } else {
            Err(CommerceError::InsufficientStock {
                product_id,
                requested: quantity,
                available: self.amount,
            })
        }
    }
}
