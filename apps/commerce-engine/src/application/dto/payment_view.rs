//! Payment views returned to the presentation layer.

use serde::Serialize;

use crate::domain::identity::User;
use crate::domain::ordering::OrderStatus;
use crate::domain::payment::{Payment, PaymentMethod, PaymentStatus};
use crate::domain::shared::{Money, OrderId, PaymentId, TransactionKey, UserId};

use super::order_view::OrderSummary;

/// A payment as exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentView {
    /// Payment identifier.
    pub id: PaymentId,
    /// The paid order.
    pub order_id: OrderId,
    /// The payer.
    pub user_id: UserId,
    /// Lifecycle status.
    pub status: PaymentStatus,
    /// Payment channel.
    pub method: PaymentMethod,
    /// Amount, equal to the order total at payment time.
    pub amount: Money,
    /// External transaction reference, if any.
    pub transaction_key: Option<TransactionKey>,
}

impl From<&Payment> for PaymentView {
    fn from(payment: &Payment) -> Self {
        Self {
            id: payment.id().clone(),
            order_id: payment.order_id().clone(),
            user_id: payment.user_id().clone(),
            status: payment.status(),
            method: payment.method(),
            amount: payment.amount(),
            transaction_key: payment.transaction_key().cloned(),
        }
    }
}

/// Result of creating a payment: the payment plus the updated order status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    /// The created payment.
    pub payment: PaymentView,
    /// Order status after payment attachment (PAID).
    pub order_status: OrderStatus,
}

/// A payer snapshot embedded in a payment detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub username: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().clone(),
            username: user.username().to_string(),
        }
    }
}

/// A payment with its referenced order and payer snapshots.
///
/// The references are joined best-effort: a payment whose order or payer has
/// since disappeared still renders, with the snapshot absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentDetail {
    /// The payment.
    pub payment: PaymentView,
    /// The paid order, if it still exists.
    pub order: Option<OrderSummary>,
    /// The payer, if the account still exists.
    pub payer: Option<UserView>,
}
