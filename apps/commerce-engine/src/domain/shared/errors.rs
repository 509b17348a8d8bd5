//! Domain errors shared across bounded contexts.

use std::fmt;

/// HTTP-mappable severity of a domain error.
///
/// The presentation layer translates these to response codes; the core only
/// classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStatus {
    /// Client supplied malformed or inconsistent input (400).
    BadRequest,
    /// Caller lacks authority over the aggregate (403).
    Forbidden,
    /// The primary aggregate does not exist (404).
    NotFound,
    /// Unexpected fault, e.g. a storage conflict (500).
    Internal,
}

impl ErrorStatus {
    /// Get the HTTP status code for this severity.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }
}

/// Errors raised by shared value objects.
///
/// These are independent of any bounded context; workflows map them into
/// their context-specific error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// An arithmetic result does not fit the 64-bit amount range.
    AmountOverflow {
        /// The operation that overflowed ("add" or "multiply").
        operation: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::AmountOverflow { operation } => {
                write!(f, "Amount overflow during {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_http_codes() {
        assert_eq!(ErrorStatus::BadRequest.http_status(), 400);
        assert_eq!(ErrorStatus::Forbidden.http_status(), 403);
        assert_eq!(ErrorStatus::NotFound.http_status(), 404);
        assert_eq!(ErrorStatus::Internal.http_status(), 500);
    }

    #[test]
    fn domain_error_invalid_value_display() {
        let err = DomainError::InvalidValue {
            field: "quantity".to_string(),
            message: "must be positive".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("quantity"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn domain_error_overflow_display() {
        let err = DomainError::AmountOverflow {
            operation: "multiply".to_string(),
        };
        assert!(format!("{err}").contains("multiply"));
    }

    #[test]
    fn domain_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(DomainError::AmountOverflow {
            operation: "add".to_string(),
        });
        assert!(!err.to_string().is_empty());
    }
}
