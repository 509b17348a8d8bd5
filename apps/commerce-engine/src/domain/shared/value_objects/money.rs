//! Money value object for currency amounts.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::domain::shared::DomainError;

/// A monetary amount in currency minor units.
///
/// Represented as a signed 64-bit integer. All arithmetic is overflow-checked:
/// a result outside the `i64` range fails with [`DomainError::AmountOverflow`]
/// rather than saturating or wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a new Money value from minor units.
    #[must_use]
    pub const fn from_minor_units(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Get the inner minor-unit value.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns true if this amount is positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if this amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add another amount, failing on overflow.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::AmountOverflow`] if the exact sum does not fit
    /// in the 64-bit range.
    pub fn checked_add(self, rhs: Self) -> Result<Self, DomainError> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or_else(|| DomainError::AmountOverflow {
                operation: "add".to_string(),
            })
    }

    /// Multiply by an integer factor, failing on overflow.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::AmountOverflow`] if the exact product does not
    /// fit in the 64-bit range.
    pub fn checked_mul(self, factor: i64) -> Result<Self, DomainError> {
        self.0
            .checked_mul(factor)
            .map(Self)
            .ok_or_else(|| DomainError::AmountOverflow {
                operation: "multiply".to_string(),
            })
    }

}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}
