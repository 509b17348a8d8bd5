//! Shared Domain Types
//!
//! Value objects and errors shared across bounded contexts.

pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, ErrorStatus};
pub use value_objects::{
    Money, OrderId, OrderItemId, Page, PageRequest, PaymentId, ProductId, Quantity, Timestamp,
    TransactionKey, UserId,
};
