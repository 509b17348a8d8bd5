//! Product snapshot value.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, ProductId, Timestamp};

/// A catalog product at a point in time.
///
/// Stock mutations produce new snapshots via [`super::stock_ledger`]; the
/// caller persists the returned value. `version` is the optimistic-concurrency
/// counter maintained by the store: a snapshot staged for commit must still
/// match the stored version, and the store bumps it on every committed write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    stock: i64,
    version: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Product {
    /// Create a new product with version 0.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, stock: i64) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            name: name.into(),
            price,
            stock,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Get the product ID.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    /// Get the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the unit price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Get the available stock.
    #[must_use]
    pub const fn stock(&self) -> i64 {
        self.stock
    }

    /// Get the optimistic-concurrency version.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Return a snapshot with the given stock level.
    ///
    /// Keeps the version the snapshot was read at; the store validates it
    /// on commit.
    #[must_use]
    pub fn with_stock(self, stock: i64) -> Self {
        Self {
            stock,
            updated_at: Timestamp::now(),
            ..self
        }
    }

    /// Return a snapshot with the version bumped by one.
    ///
    /// Called by the store when a write commits.
    #[must_use]
    pub fn with_next_version(self) -> Self {
        Self {
            version: self.version + 1,
            ..self
        }
    }
}
