//! Order status in the lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status.
///
/// Allowed transitions: CREATED → PAID (payment attached), CREATED → CANCELLED,
/// PAID → CANCELLED. CANCELLED is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order placed, not yet paid.
    Created,
    /// Payment attached and completed.
    Paid,
    /// Order cancelled; stock restored and payment reversed.
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "CREATED"),
            Self::Paid => write!(f, "PAID"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(OrderStatus::Created, false; "created is not terminal")]
    #[test_case(OrderStatus::Paid, false; "paid is not terminal")]
    #[test_case(OrderStatus::Cancelled, true; "cancelled is terminal")]
    fn order_status_is_terminal(status: OrderStatus, expected: bool) {
        assert_eq!(status.is_terminal(), expected);
    }

    #[test]
    fn order_status_display() {
        assert_eq!(format!("{}", OrderStatus::Created), "CREATED");
        assert_eq!(format!("{}", OrderStatus::Paid), "PAID");
        assert_eq!(format!("{}", OrderStatus::Cancelled), "CANCELLED");
    }

    #[test]
    fn order_status_serde() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");

        let parsed: OrderStatus = serde_json::from_str("\"PAID\"").unwrap();
        assert_eq!(parsed, OrderStatus::Paid);
    }
}
