//! Order views returned to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::domain::ordering::{Order, OrderItem, OrderStatus};
use crate::domain::payment::Payment;
use crate::domain::shared::{Money, OrderId, OrderItemId, ProductId, Quantity, UserId};

use super::payment_view::PaymentView;

/// One line item of a placement request: a product and a raw quantity.
///
/// The quantity is unvalidated client input; the placement workflow rejects
/// anything below 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRequest {
    /// Product to order.
    pub product_id: ProductId,
    /// Requested unit count.
    pub quantity: i64,
}

impl LineItemRequest {
    /// Create a line item request.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A line item as exposed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItemView {
    /// Item identifier.
    pub id: OrderItemId,
    /// Ordered product.
    pub product_id: ProductId,
    /// Product name frozen at order time.
    pub product_name: String,
    /// Unit price frozen at order time.
    pub unit_price: Money,
    /// Ordered quantity.
    pub quantity: Quantity,
    /// Unit price × quantity.
    pub line_total: Money,
}

impl From<&OrderItem> for OrderItemView {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id().clone(),
            product_id: item.product_id().clone(),
            product_name: item.product_name().to_string(),
            unit_price: item.unit_price(),
            quantity: item.quantity(),
            line_total: item.line_total(),
        }
    }
}

/// A full order including items and the attached payment, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    /// Order identifier.
    pub id: OrderId,
    /// Owner's user ID.
    pub user_id: UserId,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Sum of line totals.
    pub total_amount: Money,
    /// Line items in request order.
    pub items: Vec<OrderItemView>,
    /// The attached payment, joined by the repository layer.
    pub payment: Option<PaymentView>,
}

impl OrderView {
    /// Build a view from an order and its joined payment.
    #[must_use]
    pub fn of(order: &Order, payment: Option<&Payment>) -> Self {
        Self {
            id: order.id().clone(),
            user_id: order.user_id().clone(),
            status: order.status(),
            total_amount: order.total_amount(),
            items: order.items().iter().map(OrderItemView::from).collect(),
            payment: payment.map(PaymentView::from),
        }
    }
}

/// One row of an order listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    /// Order identifier.
    pub id: OrderId,
    /// Owner's user ID.
    pub user_id: UserId,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Sum of line totals.
    pub total_amount: Money,
    /// Number of line items.
    pub item_count: usize,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id().clone(),
            user_id: order.user_id().clone(),
            status: order.status(),
            total_amount: order.total_amount(),
            item_count: order.items().len(),
        }
    }
}
