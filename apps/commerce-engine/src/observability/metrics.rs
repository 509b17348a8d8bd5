//! Workflow metrics.
//!
//! Thin helpers over the `metrics` facade. The process hosting the core is
//! responsible for installing a recorder/exporter; without one these are
//! no-ops.

use metrics::{counter, histogram};

/// Record a successfully placed order.
pub fn record_order_placed(item_count: usize, total_minor_units: i64) {
    counter!("commerce_orders_placed_total").increment(1);
    histogram!("commerce_order_items").record(item_count as f64);
    histogram!("commerce_order_amount_minor_units").record(total_minor_units as f64);
}

/// Record a rejected order placement.
pub fn record_order_rejected(reason: &'static str) {
    counter!("commerce_orders_rejected_total", "reason" => reason).increment(1);
}

/// Record a successful order cancellation.
pub fn record_order_cancelled(had_payment: bool) {
    let with_payment = if had_payment { "true" } else { "false" };
    counter!("commerce_orders_cancelled_total", "with_payment" => with_payment).increment(1);
}

/// Record a successfully created payment.
pub fn record_payment_created(method: &str) {
    counter!("commerce_payments_created_total", "method" => method.to_string()).increment(1);
}
