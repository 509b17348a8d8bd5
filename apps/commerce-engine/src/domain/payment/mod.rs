//! Payment Bounded Context
//!
//! A payment is linked one-to-one with an order by ID reference. The amount
//! is always derived from the order total; CANCELLED is terminal.

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use aggregate::Payment;
pub use errors::PaymentError;
pub use repository::PaymentRepository;
pub use value_objects::{PaymentMethod, PaymentStatus};
