//! User Repository Trait

use async_trait::async_trait;

use super::errors::UserError;
use super::user::User;
use crate::domain::shared::UserId;

/// Repository trait for user lookups.
///
/// The core only reads users; account management is an external collaborator.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
}
