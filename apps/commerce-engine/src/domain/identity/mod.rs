//! Identity Bounded Context
//!
//! Authenticated principals, the closed role set, and the user lookup
//! collaborator contract. Authentication itself is out of scope.

pub mod errors;
pub mod principal;
pub mod repository;
pub mod user;

pub use errors::UserError;
pub use principal::Principal;
pub use repository::UserRepository;
pub use user::{Role, User};
