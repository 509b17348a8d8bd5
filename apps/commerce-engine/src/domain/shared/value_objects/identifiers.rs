//! Strongly-typed identifiers for domain entities.
//!
//! These prevent mixing up IDs from different contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Generate a new unique identifier using UUID v4.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the inner string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

define_id!(ProductId, "Unique identifier for a catalog product.");
define_id!(OrderId, "Unique identifier for an order.");
define_id!(OrderItemId, "Unique identifier for an order line item.");
define_id!(PaymentId, "Unique identifier for a payment.");
define_id!(UserId, "Unique identifier for a user account.");
define_id!(
    TransactionKey,
    "Opaque reference to an external payment transaction."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_new_and_display() {
        let id = OrderId::new("ord-123");
        assert_eq!(id.as_str(), "ord-123");
        assert_eq!(format!("{id}"), "ord-123");
    }

    #[test]
    fn order_id_generate_is_unique() {
        let id1 = OrderId::generate();
        let id2 = OrderId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn product_id_equality() {
        let id1 = ProductId::new("prod-1");
        let id2 = ProductId::new("prod-1");
        let id3 = ProductId::new("prod-2");
        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn user_id_from_string() {
        let id: UserId = "user-123".into();
        assert_eq!(id.as_str(), "user-123");

        let id: UserId = String::from("user-456").into();
        assert_eq!(id.as_str(), "user-456");
    }

    #[test]
    fn payment_id_into_inner() {
        let id = PaymentId::new("pay-123");
        assert_eq!(id.into_inner(), "pay-123");
    }

    #[test]
    fn transaction_key_new() {
        let key = TransactionKey::new("tx-20260101-0001");
        assert_eq!(key.as_str(), "tx-20260101-0001");
    }

    #[test]
    fn serde_roundtrip() {
        let id = OrderId::new("ord-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ord-123\"");

        let parsed: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn hash_works_for_collections() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ProductId::new("prod-1"));
        set.insert(ProductId::new("prod-2"));
        set.insert(ProductId::new("prod-1")); // duplicate

        assert_eq!(set.len(), 2);
    }
}
