//! Payment Aggregate Root

use serde::{Deserialize, Serialize};

use crate::domain::ordering::Order;
use crate::domain::payment::value_objects::{PaymentMethod, PaymentStatus};
use crate::domain::shared::{Money, OrderId, PaymentId, Timestamp, TransactionKey, UserId};

/// A payment against exactly one order.
///
/// The amount is always derived from the order's total at creation time,
/// never taken from client input. Transitions are pure: each consumes the
/// snapshot and returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    id: PaymentId,
    order_id: OrderId,
    user_id: UserId,
    status: PaymentStatus,
    method: PaymentMethod,
    amount: Money,
    transaction_key: Option<TransactionKey>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Payment {
    /// Create a COMPLETED payment for an order.
    ///
    /// The amount is copied from the order's current total.
    #[must_use]
    pub fn new(
        order: &Order,
        payer_id: UserId,
        method: PaymentMethod,
        transaction_key: Option<TransactionKey>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: PaymentId::generate(),
            order_id: order.id().clone(),
            user_id: payer_id,
            status: PaymentStatus::Completed,
            method,
            amount: order.total_amount(),
            transaction_key,
            created_at: now,
            updated_at: now,
        }
    }

    /// Get the payment ID.
    #[must_use]
    pub const fn id(&self) -> &PaymentId {
        &self.id
    }

    /// Get the paid order's ID.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Get the payer's user ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> PaymentStatus {
        self.status
    }

    /// Get the payment method.
    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Get the paid amount.
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Get the external transaction reference, if any.
    #[must_use]
    pub const fn transaction_key(&self) -> Option<&TransactionKey> {
        self.transaction_key.as_ref()
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Check ownership against a user ID.
    #[must_use]
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Set status to COMPLETED.
    #[must_use]
    pub fn mark_completed(mut self) -> Self {
        self.status = PaymentStatus::Completed;
        self.updated_at = Timestamp::now();
        self
    }

    /// Set status to CANCELLED.
    ///
    /// Unconditional; the cancellation workflow rejects already-cancelled
    /// payments first.
    #[must_use]
    pub fn mark_cancelled(mut self) -> Self {
        self.status = PaymentStatus::Cancelled;
        self.updated_at = Timestamp::now();
        self
    }
}
