//! Unit-of-work port: the transactional boundary of a workflow.
//!
//! Workflows read through the repository traits, accumulate every write into
//! a [`StagedWrites`] set, and commit exactly once. A failure at any earlier
//! step therefore persists nothing; a failed commit persists nothing either.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::Product;
use crate::domain::ordering::Order;
use crate::domain::payment::Payment;

/// Writes accumulated by one workflow call, committed atomically.
#[derive(Debug, Clone, Default)]
pub struct StagedWrites {
    products: Vec<Product>,
    orders: Vec<Order>,
    payments: Vec<Payment>,
}

impl StagedWrites {
    /// Create an empty write set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a product snapshot for commit.
    pub fn stage_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Stage an order snapshot for commit.
    pub fn stage_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Stage a payment snapshot for commit.
    pub fn stage_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    /// Staged product snapshots.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Staged order snapshots.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Staged payment snapshots.
    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Returns true if nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.orders.is_empty() && self.payments.is_empty()
    }
}

/// Commit failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// A staged product snapshot was read at a version that is no longer
    /// current. Concurrent decrements of the same stock counter are
    /// serialized by this check.
    #[error("write conflict on {entity} {id}: stale version")]
    Conflict {
        /// Entity kind ("product").
        entity: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// The backing store rejected the commit.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Transactional commit port.
///
/// Implementations apply the whole write set atomically: either every staged
/// snapshot becomes visible or none does.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Commit all staged writes atomically.
    ///
    /// # Errors
    ///
    /// Returns [`CommitError::Conflict`] if any staged product version is
    /// stale, or [`CommitError::Unavailable`] on storage faults. Nothing is
    /// persisted on error.
    async fn commit(&self, writes: StagedWrites) -> Result<(), CommitError>;
}
