//! Ordering Bounded Context
//!
//! Manages the order lifecycle: placement against live stock, payment
//! attachment, and cancellation with stock restoration.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: immutable snapshots with pure transition methods
//! - **Line Items**: product name/price frozen at order time
//! - **Total Invariant**: the total always equals the sum of line totals

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use aggregate::{Order, OrderItem};
pub use errors::OrderError;
pub use repository::OrderRepository;
pub use value_objects::OrderStatus;
