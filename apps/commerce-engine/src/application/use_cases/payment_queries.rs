//! Payment Queries
//!
//! Read path for a single payment with its referenced order and payer
//! snapshots joined best-effort.

use std::sync::Arc;

use crate::application::dto::{OrderSummary, PaymentDetail, PaymentView, UserView};
use crate::domain::identity::{Principal, UserRepository};
use crate::domain::ordering::OrderRepository;
use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::PaymentRepository;
use crate::domain::shared::PaymentId;
use crate::error::CoreError;

/// Read-side use cases for payments.
pub struct PaymentQueries<Y, O, U>
where
    Y: PaymentRepository,
    O: OrderRepository,
    U: UserRepository,
{
    payments: Arc<Y>,
    orders: Arc<O>,
    users: Arc<U>,
}

impl<Y, O, U> PaymentQueries<Y, O, U>
where
    Y: PaymentRepository,
    O: OrderRepository,
    U: UserRepository,
{
    /// Create new `PaymentQueries`.
    pub const fn new(payments: Arc<Y>, orders: Arc<O>, users: Arc<U>) -> Self {
        Self {
            payments,
            orders,
            users,
        }
    }

    /// Get one payment with order and payer snapshots.
    ///
    /// A payment whose order or payer has since disappeared still renders,
    /// with the snapshot absent.
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` if absent, `PaymentForbidden` if the caller
    /// is neither the payer nor elevated.
    pub async fn get_payment(
        &self,
        principal: &Principal,
        payment_id: &PaymentId,
    ) -> Result<PaymentDetail, CoreError> {
        let payment = self
            .payments
            .find_by_id(payment_id)
            .await?
            .ok_or_else(|| PaymentError::NotFound {
                payment_id: payment_id.to_string(),
            })?;
        if !payment.is_owned_by(principal.user_id()) && !principal.has_elevated_privilege() {
            return Err(PaymentError::Forbidden {
                payment_id: payment_id.to_string(),
            }
            .into());
        }

        let order = self.orders.find_by_id(payment.order_id()).await?;
        let payer = self.users.find_by_id(payment.user_id()).await?;

        Ok(PaymentDetail {
            payment: PaymentView::from(&payment),
            order: order.as_ref().map(OrderSummary::from),
            payer: payer.as_ref().map(UserView::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::LineItemRequest;
    use crate::application::use_cases::{CreatePaymentUseCase, PlaceOrderUseCase};
    use crate::domain::catalog::Product;
    use crate::domain::identity::{Role, User};
    use crate::domain::ordering::OrderStatus;
    use crate::domain::payment::{PaymentMethod, PaymentStatus};
    use crate::domain::shared::{Money, OrderId, ProductId, UserId};
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

    fn queries(store: &Arc<Store>) -> PaymentQueries<Store, Store, Store> {
        PaymentQueries::new(store.clone(), store.clone(), store.clone())
    }

    fn owner() -> Principal {
        Principal::without_roles(UserId::new("user-1"))
    }

    async fn paid_order(store: &Arc<Store>) -> (OrderId, PaymentId) {
        let place = PlaceOrderUseCase::new(store.clone(), store.clone(), store.clone());
        let order_id = place
            .execute(&owner(), &[LineItemRequest::new(ProductId::new("p1"), 2)])
            .await
            .unwrap()
            .id;
        let pay = CreatePaymentUseCase::new(store.clone(), store.clone(), store.clone());
        let receipt = pay
            .execute(&owner(), &order_id, PaymentMethod::Card, None)
            .await
            .unwrap();
        (order_id, receipt.payment.id)
    }

    #[tokio::test]
    async fn payer_gets_payment_with_snapshots() {
        let store = seeded_store();
        let (order_id, payment_id) = paid_order(&store).await;

        let detail = queries(&store)
            .get_payment(&owner(), &payment_id)
            .await
            .unwrap();

        assert_eq!(detail.payment.status, PaymentStatus::Completed);
        let order = detail.order.unwrap();
        assert_eq!(order.id, order_id);
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(detail.payer.unwrap().username, "alice");
    }

    #[tokio::test]
    async fn missing_payer_renders_without_snapshot() {
        let store = seeded_store();
        let (_, payment_id) = paid_order(&store).await;
        store.remove_user(&UserId::new("user-1"));

        let detail = queries(&store)
            .get_payment(&owner(), &payment_id)
            .await
            .unwrap();

        assert!(detail.payer.is_none());
        assert!(detail.order.is_some());
    }

    #[tokio::test]
    async fn unknown_payment_not_found() {
        let store = seeded_store();
        let err = queries(&store)
            .get_payment(&owner(), &PaymentId::new("ghost"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Payment(PaymentError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn stranger_is_forbidden_admin_is_not() {
        let store = seeded_store();
        let (_, payment_id) = paid_order(&store).await;

        let stranger = Principal::without_roles(UserId::new("user-2"));
        let err = queries(&store)
            .get_payment(&stranger, &payment_id)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Payment(PaymentError::Forbidden { .. })
        ));

        let admin = Principal::new(UserId::new("user-2"), vec![Role::Admin]);
        assert!(queries(&store)
            .get_payment(&admin, &payment_id)
            .await
            .is_ok());
    }
}
