//! Cancel Order Use Case

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::OrderView;
use crate::application::ports::{StagedWrites, UnitOfWork};
use crate::domain::catalog::stock_ledger::increment_stock;
use crate::domain::catalog::{Product, ProductRepository};
use crate::domain::identity::Principal;
use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::{Order, OrderRepository, OrderStatus};
use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::{Payment, PaymentRepository, PaymentStatus};
use crate::domain::shared::{OrderId, ProductId};
use crate::error::CoreError;
use crate::observability::metrics;

use super::stock_error_to_order;

/// Use case for cancelling an order, reversing its payment and stock effects.
///
/// The payment cancellation, stock restoration, and order transition commit
/// in one transaction; a failure at any step persists nothing.
pub struct CancelOrderUseCase<O, Y, P, T>
where
    O: OrderRepository,
    Y: PaymentRepository,
    P: ProductRepository,
    T: UnitOfWork,
{
    orders: Arc<O>,
    payments: Arc<Y>,
    products: Arc<P>,
    tx: Arc<T>,
}

impl<O, Y, P, T> CancelOrderUseCase<O, Y, P, T>
where
    O: OrderRepository,
    Y: PaymentRepository,
    P: ProductRepository,
    T: UnitOfWork,
{
    /// Create a new `CancelOrderUseCase`.
    pub const fn new(orders: Arc<O>, payments: Arc<Y>, products: Arc<P>, tx: Arc<T>) -> Self {
        Self {
            orders,
            payments,
            products,
            tx,
        }
    }

    /// Cancel an order on behalf of the authenticated principal.
    ///
    /// The caller must own the order or hold an elevated role; the same rule
    /// applies separately to the attached payment.
    ///
    /// # Errors
    ///
    /// Returns `OrderNotFound`, `OrderForbidden`, `OrderAlreadyCancelled`,
    /// `PaymentNotFound`, `PaymentAlreadyCancelled`, `PaymentForbidden`, or
    /// `ProductNotFound`; state is unchanged in every failure case.
    pub async fn execute(
        &self,
        principal: &Principal,
        order_id: &OrderId,
    ) -> Result<OrderView, CoreError> {
        // 1-2. Load and authorize.
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

        // 3. Cancellation is not repeatable.
        if order.status() == OrderStatus::Cancelled {
            return Err(OrderError::AlreadyCancelled {
                order_id: order_id.to_string(),
            }
            .into());
        }

        // 4-5. Reverse the attached payment; a PAID order without one is an
        //      inconsistent state the workflow refuses to touch.
        let cancelled_payment = match order.payment_id() {
            Some(payment_id) => {
                let payment = self
                    .payments
                    .find_by_id(payment_id)
                    .await?
                    .ok_or_else(|| PaymentError::NotFound {
                        payment_id: payment_id.to_string(),
                    })?;
                Some(Self::cancel_payment(payment, principal)?)
            }
            None => {
                if order.status() == OrderStatus::Paid {
                    return Err(PaymentError::MissingForOrder {
                        order_id: order_id.to_string(),
                    }
                    .into());
                }
                None
            }
        };

        // 6. Restore stock for every line item.
        let mut writes = StagedWrites::new();
        self.restore_stock(&order, &mut writes).await?;

        // 7. Mark cancelled; the payment back-reference stays attached.
        let cancelled = order.mark_cancelled();
        let had_payment = cancelled_payment.is_some();
        if let Some(payment) = &cancelled_payment {
            writes.stage_payment(payment.clone());
        }
        writes.stage_order(cancelled.clone());
        self.tx.commit(writes).await?;

        tracing::info!(
            order_id = %cancelled.id(),
            user_id = %principal.user_id(),
            had_payment,
            "order cancelled"
        );
        metrics::record_order_cancelled(had_payment);

        Ok(OrderView::of(&cancelled, cancelled_payment.as_ref()))
    }

    fn cancel_payment(payment: Payment, principal: &Principal) -> Result<Payment, PaymentError> {
        if payment.status() == PaymentStatus::Cancelled {
            return Err(PaymentError::AlreadyCancelled {
                payment_id: payment.id().to_string(),
            });
        }
        if !payment.is_owned_by(principal.user_id()) && !principal.has_elevated_privilege() {
            return Err(PaymentError::Forbidden {
                payment_id: payment.id().to_string(),
            });
        }
        Ok(payment.mark_cancelled())
    }

    async fn restore_stock(
        &self,
        order: &Order,
        writes: &mut StagedWrites,
    ) -> Result<(), CoreError> {
        if order.items().is_empty() {
            return Ok(());
        }

        let mut distinct_ids: Vec<ProductId> = Vec::new();
        for item in order.items() {
            if !distinct_ids.contains(item.product_id()) {
                distinct_ids.push(item.product_id().clone());
            }
        }

        let fetched = self
            .products
            .find_by_ids(&distinct_ids)
            .await
            .map_err(stock_error_to_order)?;
        let mut product_map: HashMap<ProductId, Product> = fetched
            .into_iter()
            .map(|product| (product.id().clone(), product))
            .collect();

        for item in order.items() {
            let product =
                product_map
                    .get(item.product_id())
                    .ok_or_else(|| OrderError::ProductNotFound {
                        product_id: item.product_id().to_string(),
                    })?;
            let restored =
                increment_stock(product, item.quantity()).map_err(stock_error_to_order)?;
            product_map.insert(item.product_id().clone(), restored);
        }

        for id in &distinct_ids {
            if let Some(product) = product_map.remove(id) {
                writes.stage_product(product);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::LineItemRequest;
    use crate::application::use_cases::{CreatePaymentUseCase, PlaceOrderUseCase};
    use crate::domain::identity::{Role, User};
    use crate::domain::payment::PaymentMethod;
    use crate::domain::shared::{Money, UserId};
    use crate::infrastructure::persistence::InMemoryCommerceStore;

    type Store = InMemoryCommerceStore;

    fn seeded_store() -> Arc<Store> {
        let store = Arc::new(Store::new());
        store.insert_user(User::new(UserId::new("user-1"), "alice"));
        store.insert_user(User::new(UserId::new("user-2"), "bob"));
        store.insert_product(Product::new(
            ProductId::new("p1"),
            "Keyboard",
            Money::from_minor_units(3000),
            125,
        ));
        store
    }

    fn cancel_use_case(store: &Arc<Store>) -> CancelOrderUseCase<Store, Store, Store, Store> {
        CancelOrderUseCase::new(store.clone(), store.clone(), store.clone(), store.clone())
    }

    fn owner() -> Principal {
        Principal::without_roles(UserId::new("user-1"))
    }

    fn stock_of(store: &Store, id: &str) -> i64 {
        store.product(&ProductId::new(id)).unwrap().stock()
    }

    async fn place_order(store: &Arc<Store>, qty: i64) -> OrderId {
        let place = PlaceOrderUseCase::new(store.clone(), store.clone(), store.clone());
        let view = place
            .execute(&owner(), &[LineItemRequest::new(ProductId::new("p1"), qty)])
            .await
            .unwrap();
        view.id
    }

    async fn pay_order(store: &Arc<Store>, order_id: &OrderId) {
        let pay = CreatePaymentUseCase::new(store.clone(), store.clone(), store.clone());
        pay.execute(&owner(), order_id, PaymentMethod::Card, None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn owner_cancels_created_order_and_stock_is_restored() {
        let store = seeded_store();
        let order_id = place_order(&store, 2).await;
        assert_eq!(stock_of(&store, "p1"), 123);

        let view = cancel_use_case(&store)
            .execute(&owner(), &order_id)
            .await
            .unwrap();

        assert_eq!(view.status, OrderStatus::Cancelled);
        assert_eq!(stock_of(&store, "p1"), 125);
        assert_eq!(
            store.order(&order_id).unwrap().status(),
            OrderStatus::Cancelled
        );
    }

    #[tokio::test]
    async fn cancelling_paid_order_cancels_payment_too() {
        let store = seeded_store();
        let order_id = place_order(&store, 2).await;
        pay_order(&store, &order_id).await;

        let view = cancel_use_case(&store)
            .execute(&owner(), &order_id)
            .await
            .unwrap();

        assert_eq!(view.status, OrderStatus::Cancelled);
        let payment_view = view.payment.unwrap();
        assert_eq!(payment_view.status, PaymentStatus::Cancelled);
        assert_eq!(stock_of(&store, "p1"), 125);

        let stored_payment = store.payment(&payment_view.id).unwrap();
        assert_eq!(stored_payment.status(), PaymentStatus::Cancelled);
        // The cancelled order keeps its payment reference.
        assert!(store.order(&order_id).unwrap().payment_id().is_some());
    }

    #[tokio::test]
    async fn admin_can_cancel_another_users_order() {
        let store = seeded_store();
        let order_id = place_order(&store, 1).await;

        let admin = Principal::new(UserId::new("user-2"), vec![Role::Admin]);
        let view = cancel_use_case(&store)
            .execute(&admin, &order_id)
            .await
            .unwrap();

        assert_eq!(view.status, OrderStatus::Cancelled);
        assert_eq!(stock_of(&store, "p1"), 125);
    }

    #[tokio::test]
    async fn non_owner_is_forbidden_and_state_unchanged() {
        let store = seeded_store();
        let order_id = place_order(&store, 2).await;

        let stranger = Principal::without_roles(UserId::new("user-2"));
        let err = cancel_use_case(&store)
            .execute(&stranger, &order_id)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Order(OrderError::Forbidden { .. })));
        assert_eq!(stock_of(&store, "p1"), 123);
        assert_eq!(
            store.order(&order_id).unwrap().status(),
            OrderStatus::Created
        );
    }

    #[tokio::test]
    async fn unknown_order_not_found() {
        let store = seeded_store();
        let err = cancel_use_case(&store)
            .execute(&owner(), &OrderId::new("ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Order(OrderError::NotFound { .. })));
    }

    #[tokio::test]
    async fn cancelling_twice_fails_and_does_not_restock_again() {
        let store = seeded_store();
        let order_id = place_order(&store, 2).await;

        cancel_use_case(&store)
            .execute(&owner(), &order_id)
            .await
            .unwrap();
        assert_eq!(stock_of(&store, "p1"), 125);

        let err = cancel_use_case(&store)
            .execute(&owner(), &order_id)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Order(OrderError::AlreadyCancelled { .. })
        ));
        assert_eq!(stock_of(&store, "p1"), 125);
    }

    #[tokio::test]
    async fn paid_order_without_payment_is_inconsistent() {
        let store = seeded_store();
        // Construct the broken state directly: PAID with no payment attached.
        let order = crate::domain::ordering::Order::new(UserId::new("user-1")).mark_paid();
        let order_id = order.id().clone();
        store.insert_order(order);

        let err = cancel_use_case(&store)
            .execute(&owner(), &order_id)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Payment(PaymentError::MissingForOrder { .. })
        ));
    }

    #[tokio::test]
    async fn dangling_payment_reference_is_payment_not_found() {
        let store = seeded_store();
        let order = crate::domain::ordering::Order::new(UserId::new("user-1"))
            .assign_payment(crate::domain::shared::PaymentId::new("ghost"))
            .mark_paid();
        let order_id = order.id().clone();
        store.insert_order(order);

        let err = cancel_use_case(&store)
            .execute(&owner(), &order_id)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Payment(PaymentError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn already_cancelled_payment_blocks_cancellation() {
        let store = seeded_store();
        let order_id = place_order(&store, 1).await;
        pay_order(&store, &order_id).await;

        // Cancel the payment behind the workflow's back.
        let payment_id = store.order(&order_id).unwrap().payment_id().unwrap().clone();
        let cancelled = store.payment(&payment_id).unwrap().mark_cancelled();
        store.insert_payment(cancelled);

        let err = cancel_use_case(&store)
            .execute(&owner(), &order_id)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Payment(PaymentError::AlreadyCancelled { .. })
        ));
        // Stock untouched by the failed cancellation.
        assert_eq!(stock_of(&store, "p1"), 124);
    }

    #[tokio::test]
    async fn payment_owned_by_someone_else_is_forbidden() {
        let store = seeded_store();
        let order_id = place_order(&store, 1).await;

        // Attach a payment owned by a different user.
        let order = store.order(&order_id).unwrap();
        let payment = Payment::new(&order, UserId::new("user-2"), PaymentMethod::Card, None);
        let order = order.assign_payment(payment.id().clone());
        store.insert_payment(payment);
        store.insert_order(order);

        let err = cancel_use_case(&store)
            .execute(&owner(), &order_id)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Payment(PaymentError::Forbidden { .. })
        ));
        assert_eq!(stock_of(&store, "p1"), 124);
    }

    #[tokio::test]
    async fn missing_product_on_restore_fails_whole_cancellation() {
        let store = seeded_store();
        let order_id = place_order(&store, 2).await;
        store.remove_product(&ProductId::new("p1"));

        let err = cancel_use_case(&store)
            .execute(&owner(), &order_id)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Order(OrderError::ProductNotFound { .. })
        ));
        assert_eq!(
            store.order(&order_id).unwrap().status(),
            OrderStatus::Created
        );
    }
}
