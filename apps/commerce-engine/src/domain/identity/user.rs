//! User account snapshot and role set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::UserId;

/// A role granted to an authenticated caller.
///
/// Closed set; roles are compared by variant, never by string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full administrative authority.
    Admin,
    /// Operational authority over orders and payments.
    Manager,
    /// Regular shopper.
    Customer,
}

impl Role {
    /// Returns true if this role grants cross-user authority over orders
    /// and payments.
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::Admin | Self::Manager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
            Self::Manager => write!(f, "MANAGER"),
            Self::Customer => write!(f, "CUSTOMER"),
        }
    }
}

/// A user account as seen by the core.
///
/// Authentication and role assignment are external; the core only needs the
/// identity and a display name for payment detail views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
}

impl User {
    /// Create a user snapshot.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }

    /// Get the user ID.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Get the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_manager_are_elevated() {
        assert!(Role::Admin.is_elevated());
        assert!(Role::Manager.is_elevated());
        assert!(!Role::Customer.is_elevated());
    }

    #[test]
    fn role_display() {
        assert_eq!(format!("{}", Role::Admin), "ADMIN");
        assert_eq!(format!("{}", Role::Manager), "MANAGER");
        assert_eq!(format!("{}", Role::Customer), "CUSTOMER");
    }

    #[test]
    fn role_serde() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"MANAGER\"");

        let parsed: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn user_accessors() {
        let user = User::new(UserId::new("user-1"), "alice");
        assert_eq!(user.id().as_str(), "user-1");
        assert_eq!(user.username(), "alice");
    }
}
