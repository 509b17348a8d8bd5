//! Authenticated principal.

use serde::{Deserialize, Serialize};

use super::user::Role;
use crate::domain::shared::UserId;

/// The authenticated caller of a workflow: a user ID plus granted roles.
///
/// Produced by the (out-of-scope) authentication layer. An empty role set
/// carries no elevated privilege.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    user_id: UserId,
    roles: Vec<Role>,
}

impl Principal {
    /// Create a principal with the given roles.
    #[must_use]
    pub fn new(user_id: UserId, roles: Vec<Role>) -> Self {
        Self { user_id, roles }
    }

    /// Create a principal with no roles.
    #[must_use]
    pub fn without_roles(user_id: UserId) -> Self {
        Self {
            user_id,
            roles: Vec::new(),
        }
    }

    /// Get the caller's user ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Get the granted roles.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Returns true if the caller holds ADMIN or MANAGER.
    #[must_use]
    pub fn has_elevated_privilege(&self) -> bool {
        self.roles.iter().any(Role::is_elevated)
    }
}
