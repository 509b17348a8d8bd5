//! Order line item snapshot.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Product;
use crate::domain::shared::{Money, OrderId, OrderItemId, ProductId, Quantity};

/// One product-quantity entry within an order.
///
/// The product name and unit price are frozen at order time; later catalog
/// changes do not reach existing items. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    id: OrderItemId,
    order_id: OrderId,
    product_id: ProductId,
    product_name: String,
    unit_price: Money,
    quantity: Quantity,
    line_total: Money,
}

impl OrderItem {
    /// Snapshot a product into a line item.
    ///
    /// `line_total` is computed by the workflow via checked multiplication;
    /// it is passed in rather than recomputed so the overflow check happens
    /// exactly once.
    #[must_use]
    pub fn snapshot(
        order_id: OrderId,
        product: &Product,
        quantity: Quantity,
        line_total: Money,
    ) -> Self {
        Self {
            id: OrderItemId::generate(),
            order_id,
            product_id: product.id().clone(),
            product_name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
            line_total,
        }
    }

    /// Get the item ID.
    #[must_use]
    pub const fn id(&self) -> &OrderItemId {
        &self.id
    }

    /// Get the owning order ID.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Get the product ID.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Get the product name snapshot.
    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Get the unit price snapshot.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Get the ordered quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Get the line total (unit price × quantity).
    #[must_use]
    pub const fn line_total(&self) -> Money {
        self.line_total
    }
}
