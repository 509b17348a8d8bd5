//! Payment Value Objects

mod payment_method;
mod payment_status;

pub use payment_method::PaymentMethod;
pub use payment_status::PaymentStatus;
