//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: the transactional unit-of-work boundary
//! - **Use Cases**: order placement/cancellation, payment creation, queries
//! - **DTOs**: plain result objects for the presentation boundary

pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use use_cases::{
    CancelOrderUseCase, CreatePaymentUseCase, OrderQueries, PaymentQueries, PlaceOrderUseCase,
};
