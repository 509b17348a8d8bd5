//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure
//! dependencies. This layer defines:
//!
//! - **Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`catalog`]: Product snapshots and the stock ledger
//! - [`ordering`]: Order lifecycle (placement, payment attachment, cancellation)
//! - [`payment`]: Payments linked one-to-one with orders
//! - [`identity`]: Principals, roles, and user lookups

pub mod catalog;
pub mod identity;
pub mod ordering;
pub mod payment;
pub mod shared;
