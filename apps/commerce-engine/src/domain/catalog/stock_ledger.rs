//! Stock ledger: bookkeeping of product available quantity.
//!
//! Pure functions over in-memory [`Product`] snapshots. The caller is
//! responsible for persisting the returned snapshot; nothing here touches
//! storage.

use super::errors::CatalogError;
use super::product::Product;
use crate::domain::shared::Quantity;

/// Decrement a product's available stock.
///
/// # Errors
///
/// Returns [`CatalogError::OutOfStock`] if the decrement would take stock
/// below zero.
pub fn decrement_stock(product: &Product, quantity: Quantity) -> Result<Product, CatalogError> {
    let remaining = product.stock() - quantity.get();
    if remaining < 0 {
        return Err(CatalogError::OutOfStock {
            product_id: product.id().to_string(),
            requested: quantity.get(),
            available: product.stock(),
        });
    }
    Ok(product.clone().with_stock(remaining))
}

/// Increment a product's available stock, overflow-checked.
///
/// # Errors
///
/// Returns [`CatalogError::StockOverflow`] if the increment would overflow
/// the stock counter.
pub fn increment_stock(product: &Product, quantity: Quantity) -> Result<Product, CatalogError> {
    let restored = product
        .stock()
        .checked_add(quantity.get())
        .ok_or_else(|| CatalogError::StockOverflow {
            product_id: product.id().to_string(),
        })?;
    Ok(product.clone().with_stock(restored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{Money, ProductId};
    use proptest::prelude::*;

    fn make_product(stock: i64) -> Product {
        Product::new(
            ProductId::new("prod-1"),
            "Keyboard",
            Money::from_minor_units(3000),
            stock,
        )
    }

    #[test]
    fn decrement_reduces_stock() {
        let p = make_product(125);
        let updated = decrement_stock(&p, Quantity::new(2)).unwrap();
        assert_eq!(updated.stock(), 123);
    }

    #[test]
    fn decrement_to_exactly_zero_succeeds() {
        let p = make_product(3);
        let updated = decrement_stock(&p, Quantity::new(3)).unwrap();
        assert_eq!(updated.stock(), 0);
    }

    #[test]
    fn decrement_below_zero_fails() {
        let p = make_product(2);
        let err = decrement_stock(&p, Quantity::new(3)).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::OutOfStock {
                requested: 3,
                available: 2,
                ..
            }
        ));
    }

    #[test]
    fn decrement_does_not_mutate_input() {
        let p = make_product(10);
        let _ = decrement_stock(&p, Quantity::new(4)).unwrap();
        assert_eq!(p.stock(), 10);
    }

    #[test]
    fn increment_restores_stock() {
        let p = make_product(123);
        let updated = increment_stock(&p, Quantity::new(2)).unwrap();
        assert_eq!(updated.stock(), 125);
    }

    #[test]
    fn increment_overflow_fails() {
        let p = make_product(i64::MAX);
        let err = increment_stock(&p, Quantity::new(1)).unwrap_err();
        assert!(matches!(err, CatalogError::StockOverflow { .. }));
    }

    proptest! {
        #[test]
        fn decrement_never_goes_negative(stock in 0i64..10_000, qty in 1i64..10_000) {
            let p = make_product(stock);
            match decrement_stock(&p, Quantity::new(qty)) {
                Ok(updated) => prop_assert!(updated.stock() >= 0),
                Err(CatalogError::OutOfStock { .. }) => prop_assert!(qty > stock),
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }

        #[test]
        fn decrement_then_increment_conserves_stock(stock in 0i64..10_000, qty in 1i64..10_000) {
            let p = make_product(stock);
            if let Ok(decremented) = decrement_stock(&p, Quantity::new(qty)) {
                let restored = increment_stock(&decremented, Quantity::new(qty)).unwrap();
                prop_assert_eq!(restored.stock(), stock);
            }
        }
    }
}
