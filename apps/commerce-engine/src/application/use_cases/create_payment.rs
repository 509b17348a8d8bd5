//! Create Payment Use Case

use std::sync::Arc;

use crate::application::dto::{PaymentReceipt, PaymentView};
use crate::application::ports::{StagedWrites, UnitOfWork};
use crate::domain::identity::{Principal, UserRepository};
use crate::domain::ordering::{OrderRepository, OrderStatus};
use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::{Payment, PaymentMethod};
use crate::domain::shared::{OrderId, TransactionKey};
use crate::error::CoreError;
use crate::observability::metrics;

/// Use case for paying an existing order.
///
/// The payment amount is always derived from the order's current total, never
/// from client input. Exactly one payment may ever exist per order: both the
/// PAID-status check and the attached-payment check enforce it.
pub struct CreatePaymentUseCase<O, U, T>
where
    O: OrderRepository,
    U: UserRepository,
    T: UnitOfWork,
{
    orders: Arc<O>,
    users: Arc<U>,
    tx: Arc<T>,
}

impl<O, U, T> CreatePaymentUseCase<O, U, T>
where
    O: OrderRepository,
    U: UserRepository,
    T: UnitOfWork,
{
    /// Create a new `CreatePaymentUseCase`.
    pub const fn new(orders: Arc<O>, users: Arc<U>, tx: Arc<T>) -> Self {
        Self { orders, users, tx }
    }

    /// Pay an order on behalf of the authenticated principal.
    ///
    /// Only the order's owner may pay it; elevated roles get no bypass here.
    ///
    /// # Errors
    ///
    /// Returns `PaymentOrderNotFound`, `PaymentOrderForbidden`,
    /// `PaymentOrderCancelled`, `PaymentAlreadyExists`, or
    /// `PaymentUserNotFound`.
    pub async fn execute(
        &self,
        principal: &Principal,
        order_id: &OrderId,
        method: PaymentMethod,
        transaction_key: Option<TransactionKey>,
    ) -> Result<PaymentReceipt, CoreError> {
        // 1. The order must exist.
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| PaymentError::OrderNotFound {
                order_id: order_id.to_string(),
            })?;

        // 2. Only the owner can pay.
        if !order.is_owned_by(principal.user_id()) {
            return Err(PaymentError::OrderForbidden {
                order_id: order_id.to_string(),
            }
            .into());
        }

        // 3. Cancelled orders cannot be paid.
        if order.status() == OrderStatus::Cancelled {
            return Err(PaymentError::OrderCancelled {
                order_id: order_id.to_string(),
            }
            .into());
        }

        // 4. One payment per order: status and back-reference both guard it.
        if order.status() == OrderStatus::Paid || order.payment_id().is_some() {
            return Err(PaymentError::AlreadyExists {
                order_id: order_id.to_string(),
            }
            .into());
        }

        // 5. The paying user must exist.
        let payer = self
            .users
            .find_by_id(principal.user_id())
            .await?
            .ok_or_else(|| PaymentError::UserNotFound {
                user_id: principal.user_id().to_string(),
            })?;

        // 6-7. Create the payment and flip the order to PAID atomically.
        let payment = Payment::new(&order, payer.id().clone(), method, transaction_key);
        let paid_order = order.assign_payment(payment.id().clone()).mark_paid();

        let mut writes = StagedWrites::new();
        writes.stage_payment(payment.clone());
        writes.stage_order(paid_order.clone());
        self.tx.commit(writes).await?;

        tracing::info!(
            payment_id = %payment.id(),
            order_id = %paid_order.id(),
            method = %payment.method(),
            amount = %payment.amount(),
            "payment created"
        );
        metrics::record_payment_created(&payment.method().to_string());

        Ok(PaymentReceipt {
            payment: PaymentView::from(&payment),
            order_status: paid_order.status(),
        })
    }
}
