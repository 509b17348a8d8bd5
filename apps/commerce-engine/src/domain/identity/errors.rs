//! Identity errors.

use std::fmt;

use crate::domain::shared::ErrorStatus;

/// Errors raised by user lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    /// User not found.
    NotFound {
        /// User ID.
        user_id: String,
    },
}

impl UserError {
    /// Get the HTTP-mappable severity of this error.
    #[must_use]
    pub const fn status(&self) -> ErrorStatus {
        match self {
            Self::NotFound { .. } => ErrorStatus::NotFound,
        }
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { user_id } => {
                write!(f, "User not found: {user_id}")
            }
        }
    }
}

impl std::error::Error for UserError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_not_found_display_and_status() {
        let err = UserError::NotFound {
            user_id: "user-1".to_string(),
        };
        assert!(format!("{err}").contains("user-1"));
        assert_eq!(err.status(), ErrorStatus::NotFound);
    }
}
