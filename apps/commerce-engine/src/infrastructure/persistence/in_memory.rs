//! In-memory commerce store for testing and development.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::ports::{CommitError, StagedWrites, UnitOfWork};
use crate::domain::catalog::{CatalogError, Product, ProductRepository};
use crate::domain::identity::errors::UserError;
use crate::domain::identity::{User, UserRepository};
use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::{Order, OrderRepository};
use crate::domain::payment::errors::PaymentError;
use crate::domain::payment::{Payment, PaymentRepository};
use crate::domain::shared::{OrderId, Page, PageRequest, PaymentId, ProductId, UserId};

#[derive(Debug, Default)]
struct StoreState {
    products: HashMap<String, Product>,
    orders: HashMap<String, Order>,
    payments: HashMap<String, Payment>,
    users: HashMap<String, User>,
}

/// In-memory implementation of every repository trait plus the unit of work.
///
/// Suitable for testing and development. Not for production use. A commit
/// applies its whole write set under one write lock, so it is atomic with
/// respect to every other commit; stale product versions are rejected before
/// anything is applied.
#[derive(Debug, Default)]
pub struct InMemoryCommerceStore {
    inner: RwLock<StoreState>,
}

impl InMemoryCommerceStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a product (for test setup). Keeps the given version.
    pub fn insert_product(&self, product: Product) {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        state.products.insert(product.id().to_string(), product);
    }

    /// Seed an order (for test setup).
    pub fn insert_order(&self, order: Order) {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        state.orders.insert(order.id().to_string(), order);
    }

    /// Seed a payment (for test setup).
    pub fn insert_payment(&self, payment: Payment) {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        state.payments.insert(payment.id().to_string(), payment);
    }

    /// Seed a user (for test setup).
    pub fn insert_user(&self, user: User) {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        state.users.insert(user.id().to_string(), user);
    }

    /// Remove a product.
    pub fn remove_product(&self, id: &ProductId) {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        state.products.remove(id.as_str());
    }

    /// Remove a user.
    pub fn remove_user(&self, id: &UserId) {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        state.users.remove(id.as_str());
    }

    /// Get a product snapshot.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<Product> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        state.products.get(id.as_str()).cloned()
    }

    /// Get an order snapshot.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<Order> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        state.orders.get(id.as_str()).cloned()
    }

    /// Get a payment snapshot.
    #[must_use]
    pub fn payment(&self, id: &PaymentId) -> Option<Payment> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        state.payments.get(id.as_str()).cloned()
    }

    /// Clear all state.
    pub fn clear(&self) {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *state = StoreState::default();
    }

    fn page_of_orders(
        orders: impl Iterator<Item = Order>,
        page: &PageRequest,
    ) -> Page<Order> {
        let mut all: Vec<Order> = orders.collect();
        // Newest first; tiebreak on id for a deterministic order.
        all.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().as_str().cmp(a.id().as_str()))
        });
        let total = all.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(page.size).unwrap_or(usize::MAX);
        let content: Vec<Order> = all.into_iter().skip(offset).take(size).collect();
        Page::new(content, page, total)
    }
}

#[async_trait]
impl ProductRepository for InMemoryCommerceStore {
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.products.get(id.as_str()).cloned())
    }

    async fn find_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, CatalogError> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(ids
            .iter()
            .filter_map(|id| state.products.get(id.as_str()).cloned())
            .collect())
    }
}

#[async_trait]
impl OrderRepository for InMemoryCommerceStore {
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.orders.get(id.as_str()).cloned())
    }

    async fn find_by_owner(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<Page<Order>, OrderError> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(Self::page_of_orders(
            state
                .orders
                .values()
                .filter(|order| order.is_owned_by(user_id))
                .cloned(),
            page,
        ))
    }

    async fn find_all(&self, page: &PageRequest) -> Result<Page<Order>, OrderError> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(Self::page_of_orders(state.orders.values().cloned(), page))
    }
}

#[async_trait]
impl PaymentRepository for InMemoryCommerceStore {
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, PaymentError> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.payments.get(id.as_str()).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryCommerceStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let state = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(state.users.get(id.as_str()).cloned())
    }
}

#[async_trait]
impl UnitOfWork for InMemoryCommerceStore {
    async fn commit(&self, writes: StagedWrites) -> Result<(), CommitError> {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        // Validate every staged product version before applying anything.
        for product in writes.products() {
            if let Some(current) = state.products.get(product.id().as_str()) {
                if current.version() != product.version() {
                    return Err(CommitError::Conflict {
                        entity: "product",
                        id: product.id().to_string(),
                    });
                }
            }
        }

        for product in writes.products() {
            state.products.insert(
                product.id().to_string(),
                product.clone().with_next_version(),
            );
        }
        for order in writes.orders() {
            state.orders.insert(order.id().to_string(), order.clone());
        }
        for payment in writes.payments() {
            state
                .payments
                .insert(payment.id().to_string(), payment.clone());
        }
        Ok(())
    }
}
