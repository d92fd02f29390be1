//! Newtype IDs for type-safe identifiers.
//!
//! Product ids come from the products service as plain integers. Wrapping
//! them keeps an id from being confused with an amount, which is also an
//! integer everywhere in the cart API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product identifier as issued by the products service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create a new ID from its integer value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new(123);
        assert_eq!(id.get(), 123);
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = " 42 ".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new(789);
        assert_eq!(format!("{}", id), "789");
    }

    #[test]
    fn test_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(id, ProductId::new(7));
    }
}
