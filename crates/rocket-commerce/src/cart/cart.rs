//! Cart and cart item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A shopping cart.
///
/// Items keep insertion order and there is at most one item per product.
/// The cart serializes as a bare JSON array of items, and deserializing
/// re-checks both invariants, so a stored value that violates them is
/// rejected rather than loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from items, validating amounts and uniqueness.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.amount < 1 {
                return Err(CommerceError::InvalidQuantity(item.amount));
            }
            if !seen.insert(item.id) {
                return Err(CommerceError::DuplicateItem(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == product_id)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Append a product with amount 1.
    ///
    /// Fails if the product already has an item.
    pub fn push_product(&mut self, product: Product) -> Result<&CartItem, CommerceError> {
        if self.contains(product.id) {
            return Err(CommerceError::DuplicateItem(product.id));
        }
        self.items.push(CartItem::from_product(product));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Set an item's amount (absolute, not an increment).
    pub fn set_amount(&mut self, product_id: ProductId, amount: i64) -> Result<(), CommerceError> {
        if amount < 1 {
            return Err(CommerceError::InvalidQuantity(amount));
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))?;
        item.amount = amount;
        Ok(())
    }

    /// Remove an item, returning it.
    pub fn remove(&mut self, product_id: ProductId) -> Result<CartItem, CommerceError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == product_id)
            .ok_or(CommerceError::ItemNotInCart(product_id))?;
        Ok(self.items.remove(index))
    }

    /// Amount in cart per product, for product listings.
    pub fn amounts(&self) -> BTreeMap<ProductId, i64> {
        self.items.iter().map(|i| (i.id, i.amount)).collect()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all amounts.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.amount).sum()
    }
}

impl TryFrom<Vec<CartItem>> for Cart {
    type Error = CommerceError;

    fn try_from(items: Vec<CartItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// An item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product ID.
    pub id: ProductId,
    /// Product title (denormalized for display).
    pub title: String,
    /// Unit price.
    pub price: f64,
    /// Image URL.
    pub image: String,
    /// Quantity, at least 1.
    pub amount: i64,
}

impl CartItem {
    /// Create an item for a product with amount 1.
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }
}
