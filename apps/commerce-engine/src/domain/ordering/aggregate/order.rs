//! Order Aggregate Root
//!
//! An order is an immutable value: every transition consumes the current
//! snapshot and returns a new one, mirroring how repositories persist whole
//! aggregates. Status guards live in the workflow services; `mark_paid` and
//! `mark_cancelled` are unconditional setters, so callers must check the
//! current status before invoking them.

use serde::{Deserialize, Serialize};

use super::OrderItem;
use crate::domain::ordering::value_objects::OrderStatus;
use crate::domain::shared::{Money, OrderId, PaymentId, Timestamp, UserId};

/// Order Aggregate Root.
///
/// The attached payment is referenced by ID only; repositories join the
/// payment aggregate on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    status: OrderStatus,
    total_amount: Money,
    items: Vec<OrderItem>,
    payment_id: Option<PaymentId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Order {
    /// Create a new order for the given owner.
    ///
    /// Starts in CREATED status with no items and a zero total; the placement
    /// workflow appends items and sets the computed total before persisting.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id: OrderId::generate(),
            user_id,
            status: OrderStatus::Created,
            total_amount: Money::ZERO,
            items: Vec::new(),
            payment_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the order ID.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the owner's user ID.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the total amount.
    #[must_use]
    pub const fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Get the line items, in request order.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Get the attached payment ID, if any.
    #[must_use]
    pub const fn payment_id(&self) -> Option<&PaymentId> {
        self.payment_id.as_ref()
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

    // ========================================================================
    // Transitions (pure; each returns a new snapshot)
    // ========================================================================

    /// Append a line item.
    #[must_use]
    pub fn add_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self.updated_at = Timestamp::now();
        self
    }

    /// Set the total amount.
    ///
    /// The workflow computes the total with checked addition over all line
    /// totals; this method just records the result.
    #[must_use]
    pub fn with_total(mut self, total_amount: Money) -> Self {
        self.total_amount = total_amount;
        self.updated_at = Timestamp::now();
        self
    }

    /// Set status to PAID.
    ///
    /// Unconditional; the payment workflow verifies the order is CREATED
    /// first.
    #[must_use]
    pub fn mark_paid(mut self) -> Self {
        self.status = OrderStatus::Paid;
        self.updated_at = Timestamp::now();
        self
    }

    /// Set status to CANCELLED.
    ///
    /// Unconditional; the cancellation workflow rejects already-cancelled
    /// orders first.
    #[must_use]
    pub fn mark_cancelled(mut self) -> Self {
        self.status = OrderStatus::Cancelled;
        self.updated_at = Timestamp::now();
        self
    }

    /// Attach a payment by ID.
    #[must_use]
    pub fn assign_payment(mut self, payment_id: PaymentId) -> Self {
        self.payment_id = Some(payment_id);
        self.updated_at = Timestamp::now();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Product;
    use crate::domain::shared::{ProductId, Quantity};

    fn make_item(order_id: &OrderId, price: i64, qty: i64) -> OrderItem {
        let product = Product::new(
            ProductId::generate(),
            "Keyboard",
            Money::from_minor_units(price),
            100,
        );
        OrderItem::snapshot(
            order_id.clone(),
            &product,
            Quantity::new(qty),
            Money::from_minor_units(price * qty),
        )
    }

    #[test]
    fn order_new_defaults() {
        let order = Order::new(UserId::new("user-1"));

        assert_eq!(order.status(), OrderStatus::Created);
        assert_eq!(order.total_amount(), Money::ZERO);
        assert!(order.items().is_empty());
        assert!(order.payment_id().is_none());
        assert!(order.is_owned_by(&UserId::new("user-1")));
    }

    #[test]
    fn order_add_item_appends_in_order() {
        let order = Order::new(UserId::new("user-1"));
        let first = make_item(order.id(), 1000, 2);
        let second = make_item(order.id(), 500, 1);

        let order = order.add_item(first.clone()).add_item(second.clone());

        assert_eq!(order.items().len(), 2);
        assert_eq!(order.items()[0].id(), first.id());
        assert_eq!(order.items()[1].id(), second.id());
    }

    #[test]
    fn order_total_matches_line_totals() {
        let order = Order::new(UserId::new("user-1"));
        let first = make_item(order.id(), 1000, 2);
        let second = make_item(order.id(), 500, 1);
        let order = order.add_item(first).add_item(second);

        let sum = order
            .items()
            .iter()
            .try_fold(Money::ZERO, |acc, item| acc.checked_add(item.line_total()))
            .unwrap();
        let order = order.with_total(sum);

        assert_eq!(order.total_amount(), Money::from_minor_units(2500));
    }

    #[test]
    fn order_mark_paid() {
        let order = Order::new(UserId::new("user-1")).mark_paid();
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn order_mark_cancelled() {
        let order = Order::new(UserId::new("user-1")).mark_paid().mark_cancelled();
        assert_eq!(order.status(), OrderStatus::Cancelled);
    }

    #[test]
    fn order_assign_payment() {
        let order = Order::new(UserId::new("user-1")).assign_payment(PaymentId::new("pay-1"));
        assert_eq!(order.payment_id().unwrap().as_str(), "pay-1");
    }

    #[test]
    fn order_is_owned_by() {
        let order = Order::new(UserId::new("user-1"));
        assert!(order.is_owned_by(&UserId::new("user-1")));
        assert!(!order.is_owned_by(&UserId::new("user-2")));
    }

    #[test]
    fn order_transitions_preserve_identity() {
        let order = Order::new(UserId::new("user-1"));
        let id = order.id().clone();
        let order = order
            .with_total(Money::from_minor_units(100))
            .mark_paid()
            .mark_cancelled();
        assert_eq!(order.id(), &id);
        assert_eq!(order.user_id().as_str(), "user-1");
    }

    #[test]
    fn order_serde_roundtrip() {
        let order = Order::new(UserId::new("user-1"));
        let item = make_item(order.id(), 1000, 1);
        let order = order
            .add_item(item)
            .with_total(Money::from_minor_units(1000));

        let json = serde_json::to_string(&order).unwrap();
        let parsed: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }
}
