//! Payment Repository Trait

use async_trait::async_trait;

use super::aggregate::Payment;
use super::errors::PaymentError;
use crate::domain::shared::PaymentId;

/// Repository trait for payment lookups.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Find a payment by its ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, PaymentError>;
}
