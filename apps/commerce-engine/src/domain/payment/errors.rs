//! Payment errors.

use std::fmt;

use crate::domain::shared::ErrorStatus;

/// Errors that can occur in the payment workflows.
///
/// Referenced-entity lookups inside a payment command (`OrderNotFound`,
/// `UserNotFound`) classify as bad requests rather than 404s: the missing
/// aggregate is part of the command payload, not the addressed resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Payment not found.
    NotFound {
        /// Payment ID.
        payment_id: String,
    },

    /// A PAID order carries no resolvable payment (inconsistent state guard).
    MissingForOrder {
        /// Order ID.
        order_id: String,
    },

    /// Caller is neither the payer nor an elevated role.
    Forbidden {
        /// Payment ID.
        payment_id: String,
    },

    /// The order referenced by a payment command does not exist.
    OrderNotFound {
        /// Order ID.
        order_id: String,
    },

    /// Caller does not own the order being paid.
    OrderForbidden {
        /// Order ID.
        order_id: String,
    },

    /// The order being paid is cancelled.
    OrderCancelled {
        /// Order ID.
        order_id: String,
    },

    /// The order is already paid or already has an attached payment.
    AlreadyExists {
        /// Order ID.
        order_id: String,
    },

    /// The payment is already cancelled.
    AlreadyCancelled {
        /// Payment ID.
        payment_id: String,
    },

    /// The paying user does not exist.
    UserNotFound {
        /// User ID.
        user_id: String,
    },
}

impl PaymentError {
    /// Get the HTTP-mappable severity of this error.
    #[must_use]
    pub const fn status(&self) -> ErrorStatus {
        match self {
            Self::NotFound { .. } | Self::MissingForOrder { .. } => ErrorStatus::NotFound,
            Self::Forbidden { .. } | Self::OrderForbidden { .. } => ErrorStatus::Forbidden,
            Self::OrderNotFound { .. }
            | Self::OrderCancelled { .. }
            | Self::AlreadyExists { .. }
            | Self::AlreadyCancelled { .. }
            | Self::UserNotFound { .. } => ErrorStatus::BadRequest,
        }
    }
}

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { payment_id } => {
                write!(f, "Payment not found: {payment_id}")
            }
            Self::MissingForOrder { order_id } => {
                write!(f, "No payment attached to paid order {order_id}")
            }
            Self::Forbidden { payment_id } => {
                write!(f, "Not authorized to access payment {payment_id}")
            }
            Self::OrderNotFound { order_id } => {
                write!(f, "Order to pay not found: {order_id}")
            }
            Self::OrderForbidden { order_id } => {
                write!(f, "Not authorized to pay order {order_id}")
            }
            Self::OrderCancelled { order_id } => {
                write!(f, "Cannot pay cancelled order {order_id}")
            }
            Self::AlreadyExists { order_id } => {
                write!(f, "Order {order_id} already has a payment")
            }
            Self::AlreadyCancelled { payment_id } => {
                write!(f, "Payment {payment_id} is already cancelled")
            }
            Self::UserNotFound { user_id } => {
                write!(f, "Paying user not found: {user_id}")
            }
        }
    }
}

impl std::error::Error for PaymentError {}
