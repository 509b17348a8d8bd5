//! Place Order Use Case

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::{LineItemRequest, OrderView};
use crate::application::ports::{StagedWrites, UnitOfWork};
use crate::domain::catalog::stock_ledger::decrement_stock;
use crate::domain::catalog::{Product, ProductRepository};
use crate::domain::identity::{Principal, UserRepository};
use crate::domain::identity::errors::UserError;
use crate::domain::ordering::aggregate::{Order, OrderItem};
use crate::domain::ordering::errors::OrderError;
use crate::domain::shared::{Money, ProductId, Quantity};
use crate::error::CoreError;
use crate::observability::metrics;

use super::stock_error_to_order;

/// Use case for placing an order against live stock.
///
/// All reads happen up front; every write (decremented product snapshots and
/// the new order) is staged and committed in one transaction, so a failure at
/// any step persists nothing.
pub struct PlaceOrderUseCase<P, U, T>
where
    P: ProductRepository,
    U: UserRepository,
    T: UnitOfWork,
{
    products: Arc<P>,
    users: Arc<U>,
    tx: Arc<T>,
}

impl<P, U, T> PlaceOrderUseCase<P, U, T>
where
    P: ProductRepository,
    U: UserRepository,
    T: UnitOfWork,
{
    /// Create a new `PlaceOrderUseCase`.
    pub const fn new(products: Arc<P>, users: Arc<U>, tx: Arc<T>) -> Self {
        Self {
            products,
            users,
            tx,
        }
    }

    /// Place an order for the authenticated principal.
    ///
    /// # Errors
    ///
    /// Returns `ItemsEmpty`, `InvalidQuantity`, `ProductNotFound`,
    /// `UserNotFound`, `OutOfStock`, or `AmountOverflow`; the whole order
    /// fails atomically in every case.
    pub async fn execute(
        &self,
        principal: &Principal,
        line_items: &[LineItemRequest],
    ) -> Result<OrderView, CoreError> {
        // 1. The request must carry at least one line item.
        if line_items.is_empty() {
            metrics::record_order_rejected("items_empty");
            return Err(OrderError::ItemsEmpty.into());
        }

        // 2. Quantities are validated before any lookup.
        for request in line_items {
            if Quantity::new(request.quantity).validate_for_order().is_err() {
                metrics::record_order_rejected("invalid_quantity");
                return Err(OrderError::InvalidQuantity {
                    product_id: request.product_id.to_string(),
                    quantity: request.quantity,
                }
                .into());
            }
        }

        // 3. Batch-fetch the distinct products; a count mismatch fails the
        //    whole order.
        let distinct_ids = distinct_product_ids(line_items);
        let fetched = self
            .products
            .find_by_ids(&distinct_ids)
            .await
            .map_err(stock_error_to_order)?;
        let mut product_map: HashMap<ProductId, Product> = fetched
            .into_iter()
            .map(|product| (product.id().clone(), product))
            .collect();
        if let Some(missing) = distinct_ids.iter().find(|id| !product_map.contains_key(*id)) {
            metrics::record_order_rejected("product_not_found");
            return Err(OrderError::ProductNotFound {
                product_id: missing.to_string(),
            }
            .into());
        }

        // 4. The ordering user must exist.
        let user = self
            .users
            .find_by_id(principal.user_id())
            .await?
            .ok_or_else(|| UserError::NotFound {
                user_id: principal.user_id().to_string(),
            })?;

        // 5. Walk the request in order. Duplicate product ids accumulate
        //    against the same in-memory snapshot, so each product is
        //    decremented cumulatively and staged exactly once.
        let mut order = Order::new(user.id().clone());
        let mut total = Money::ZERO;
        for request in line_items {
            let quantity = Quantity::new(request.quantity);
            let product = product_map
                .get(&request.product_id)
                .cloned()
                .ok_or_else(|| OrderError::ProductNotFound {
                    product_id: request.product_id.to_string(),
                })?;

            let decremented = decrement_stock(&product, quantity).map_err(|e| {
                metrics::record_order_rejected("out_of_stock");
                stock_error_to_order(e)
            })?;
            product_map.insert(request.product_id.clone(), decremented);

            let line_total = product
                .price()
                .checked_mul(quantity.get())
                .map_err(|_| OrderError::AmountOverflow)?;
            total = total
                .checked_add(line_total)
                .map_err(|_| OrderError::AmountOverflow)?;

            let item = OrderItem::snapshot(order.id().clone(), &product, quantity, line_total);
            order = order.add_item(item);
        }
        let order = order.with_total(total);

        // 6. Commit product snapshots and the new order atomically.
        let mut writes = StagedWrites::new();
        for id in &distinct_ids {
            if let Some(product) = product_map.remove(id) {
                writes.stage_product(product);
            }
        }
        writes.stage_order(order.clone());
        self.tx.commit(writes).await?;

        tracing::info!(
            order_id = %order.id(),
            user_id = %order.user_id(),
            items = order.items().len(),
            total = %order.total_amount(),
            "order placed"
        );
        metrics::record_order_placed(order.items().len(), order.total_amount().minor_units());

        Ok(OrderView::of(&order, None))
    }
}

/// Distinct product ids in first-seen request order.
fn distinct_product_ids(line_items: &[LineItemRequest]) -> Vec<ProductId> {
    let mut ids: Vec<ProductId> = Vec::new();
    for request in line_items {
        if !ids.contains(&request.product_id) {
            ids.push(request.product_id.clone());
        }
    }
    ids
}
