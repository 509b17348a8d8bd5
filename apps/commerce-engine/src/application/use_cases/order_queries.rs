//! Order Queries
//!
//! Read paths for the presentation layer: paged listings and single-order
//! views with the payment joined by foreign key.

use std::sync::Arc;

use crate::application::dto::{OrderSummary, OrderView};
use crate::config::PaginationConfig;
use crate::domain::identity::Principal;
use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::OrderRepository;
use crate::domain::payment::PaymentRepository;
use crate::domain::shared::{OrderId, Page, PageRequest};
use crate::error::CoreError;

/// Read-side use cases for orders.
pub struct OrderQueries<O, Y>
where
    O: OrderRepository,
    Y: PaymentRepository,
{
    orders: Arc<O>,
    payments: Arc<Y>,
    pagination: PaginationConfig,
}

impl<O, Y> OrderQueries<O, Y>
where
    O: OrderRepository,
    Y: PaymentRepository,
{
    /// Create new `OrderQueries`.
    pub const fn new(orders: Arc<O>, payments: Arc<Y>, pagination: PaginationConfig) -> Self {
        Self {
            orders,
            payments,
            pagination,
        }
    }

    /// List orders visible to the principal, newest first.
    ///
    /// Owners see their own orders; elevated roles see all. The requested
    /// page size is clamped to the configured maximum.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying query fails.
    pub async fn list_orders(
        &self,
        principal: &Principal,
        page: PageRequest,
    ) -> Result<Page<OrderSummary>, CoreError> {
        let page = page.clamped(self.pagination.default_size, self.pagination.max_size);
        let orders = if principal.has_elevated_privilege() {
            self.orders.find_all(&page).await?
        } else {
            self.orders.find_by_owner(principal.user_id(), &page).await?
        };
        Ok(orders.map(|order| OrderSummary::from(&order)))
    }

    /// Get one order with items and the attached payment.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound` if absent, `OrderForbidden` if the caller is
    /// neither owner nor elevated.
    pub async fn get_order(
        &self,
        principal: &Principal,
        order_id: &OrderId,
    ) -> Result<OrderView, CoreError> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| OrderError::NotFound {
                order_id: order_id.to_string(),
            })?;
        if !principal.has_elevated_privilege() && !order.is_owned_by(principal.user_id()) {
            return Err(OrderError::Forbidden {
                order_id: order_id.to_string(),
            }
            .into());
        }

        let payment = match order.payment_id() {
            Some(payment_id) => self.payments.find_by_id(payment_id).await?,
            None => None,
        };
        Ok(OrderView::of(&order, payment.as_ref()))
    }
}
