//! Payment status in the lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment lifecycle status.
///
/// A payment is created COMPLETED and can only transition to CANCELLED,
/// which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Payment captured in full.
    Completed,
    /// Payment reversed; no transition leaves this state.
    Cancelled,
}

impl PaymentStatus {
    /// Returns true if the payment is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "COMPLETED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_status_is_terminal() {
        assert!(!PaymentStatus::Completed.is_terminal());
        assert!(PaymentStatus::Cancelled.is_terminal());
    }

    #[test]
    fn payment_status_display() {
        assert_eq!(format!("{}", PaymentStatus::Completed), "COMPLETED");
        assert_eq!(format!("{}", PaymentStatus::Cancelled), "CANCELLED");
    }

    #[test]
    fn payment_status_serde() {
        let json = serde_json::to_string(&PaymentStatus::Completed).unwrap();
        assert_eq!(json, "\"COMPLETED\"");

        let parsed: PaymentStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, PaymentStatus::Cancelled);
    }
}
