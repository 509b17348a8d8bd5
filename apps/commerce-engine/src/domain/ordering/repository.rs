//! Order Repository Trait
//!
//! Read-side persistence abstraction for orders. Writes flow through the
//! unit-of-work commit.

use async_trait::async_trait;

use super::aggregate::Order;
use super::errors::OrderError;
use crate::domain::shared::{OrderId, Page, PageRequest, UserId};

/// Repository trait for order lookups.
///
/// Implementations reconstruct the full aggregate (including line items and
/// the payment foreign key) on load.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// Find orders owned by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_owner(
        &self,
        user_id: &UserId,
        page: &PageRequest,
    ) -> Result<Page<Order>, OrderError>;

    /// Find all orders, newest first. For elevated-role listings.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_all(&self, page: &PageRequest) -> Result<Page<Order>, OrderError>;
}
