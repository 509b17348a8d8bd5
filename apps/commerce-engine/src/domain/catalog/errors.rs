//! Catalog and stock ledger errors.

use std::fmt;

/// Errors raised by the stock ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A decrement would take available stock below zero.
    OutOfStock {
        /// Product whose stock was insufficient.
        product_id: String,
        /// Units requested.
        requested: i64,
        /// Units available.
        available: i64,
    },

    /// An increment would overflow the stock counter.
    StockOverflow {
        /// Product whose stock counter overflowed.
        product_id: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfStock {
                product_id,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Product {product_id} out of stock: requested {requested}, available {available}"
                )
            }
            Self::StockOverflow { product_id } => {
                write!(f, "Stock counter overflow for product {product_id}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
