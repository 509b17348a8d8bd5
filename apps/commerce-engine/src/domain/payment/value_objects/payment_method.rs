//! Payment channel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The channel a payment was made through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Credit or debit card.
    Card,
    /// Direct bank transfer.
    BankTransfer,
    /// Mobile carrier billing.
    Mobile,
    /// Store point balance.
    Point,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => write!(f, "CARD"),
            Self::BankTransfer => write!(f, "BANK_TRANSFER"),
            Self::Mobile => write!(f, "MOBILE"),
            Self::Point => write!(f, "POINT"),
        }
    }
}
