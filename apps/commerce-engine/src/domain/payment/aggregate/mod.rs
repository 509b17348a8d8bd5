//! Payment Aggregate

mod payment;

pub use payment::Payment;
