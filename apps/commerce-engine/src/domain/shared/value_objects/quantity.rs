//! Quantity value object for ordered product counts.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::shared::DomainError;

/// A count of product units within an order line.
///
/// Represented as a signed 64-bit integer so stock arithmetic shares the
/// overflow discipline of [`super::Money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Create a new Quantity.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero quantity.
    pub const ZERO: Self = Self(0);

    /// Get the inner value.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Returns true if this quantity is positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Validate quantity for use in an order line.
    ///
    /// # Errors
    ///
    /// Returns error if the quantity is zero or negative.
    pub fn validate_for_order(&self) -> Result<(), DomainError> {
        if self.0 <= 0 {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: "order quantity must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quantity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_new_and_get() {
        let q = Quantity::new(5);
        assert_eq!(q.get(), 5);
        assert_eq!(format!("{q}"), "5");
    }

    #[test]
    fn quantity_validate_positive() {
        assert!(Quantity::new(1).validate_for_order().is_ok());
        assert!(Quantity::new(100).validate_for_order().is_ok());
    }

    #[test]
    fn quantity_validate_zero_fails() {
        assert!(Quantity::ZERO.validate_for_order().is_err());
    }

    #[test]
    fn quantity_validate_negative_fails() {
        assert!(Quantity::new(-3).validate_for_order().is_err());
    }

    #[test]
    fn quantity_ordering() {
        assert!(Quantity::new(2) < Quantity::new(3));
        assert_eq!(Quantity::new(2), Quantity::new(2));
    }

    #[test]
    fn quantity_serde_roundtrip() {
        let q = Quantity::new(7);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "7");
        let parsed: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, q);
    }
}
