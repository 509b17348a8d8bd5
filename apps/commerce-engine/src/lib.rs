// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Commerce Engine - Rust Core Library
//!
//! The order–payment–inventory consistency core of a retail backend: placing
//! an order against live stock, attaching a payment to an order, and
//! cancelling an order/payment pair while reversing inventory and amount
//! effects.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, repository traits)
//!   - `catalog`: Product snapshots and the stock ledger
//!   - `ordering`: Order aggregate, status lifecycle, line-item snapshots
//!   - `payment`: Payment aggregate, one-to-one with orders
//!   - `identity`: Principals, the closed role set, user lookups
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: the transactional `UnitOfWork` boundary
//!   - `use_cases`: `PlaceOrder`, `CancelOrder`, `CreatePayment`, queries
//!   - `dto`: plain result objects for the presentation boundary
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: in-memory store implementing every contract
//!
//! The HTTP presentation layer, authentication protocol, and durable storage
//! technology are external collaborators; the core exposes traits and plain
//! result objects to them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod observability;

pub use error::CoreError;
