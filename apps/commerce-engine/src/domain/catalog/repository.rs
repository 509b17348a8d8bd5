//! Product Repository Trait
//!
//! Read-side persistence abstraction for products. Writes flow through the
//! unit-of-work commit, not per-call saves.

use async_trait::async_trait;

use super::errors::CatalogError;
use super::product::Product;
use crate::domain::shared::ProductId;

/// Repository trait for product lookups.
///
/// This is a domain interface (port) implemented by adapters in the
/// infrastructure layer.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;

    /// Find all products matching the given IDs in one batch lookup.
    ///
    /// Missing IDs are simply absent from the result; callers compare counts
    /// to detect them.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, CatalogError>;
}
