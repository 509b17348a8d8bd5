//! Crate-level error boundary.
//!
//! Use cases return [`CoreError`], which wraps the per-context domain errors
//! unchanged. The presentation layer translates the carried
//! [`ErrorStatus`](crate::domain::shared::ErrorStatus) to client-visible
//! responses; the core never maps errors to wire formats itself.

use thiserror::Error;

use crate::application::ports::CommitError;
use crate::domain::identity::UserError;
use crate::domain::ordering::OrderError;
use crate::domain::payment::PaymentError;
use crate::domain::shared::ErrorStatus;

/// Any failure a workflow or query can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Order workflow failure.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Payment workflow failure.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// User lookup failure.
    #[error(transparent)]
    User(#[from] UserError),

    /// Transactional commit failure.
    #[error(transparent)]
    Storage(#[from] CommitError),
}

impl CoreError {
    /// Get the HTTP-mappable severity of this error.
    #[must_use]
    pub const fn status(&self) -> ErrorStatus {
        match self {
            Self::Order(e) => e.status(),
            Self::Payment(e) => e.status(),
            Self::User(e) => e.status(),
            Self::Storage(_) => ErrorStatus::Internal,
        }
    }
}
