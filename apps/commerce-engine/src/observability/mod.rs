//! Observability
//!
//! Tracing initialization and workflow metrics. Exporters and listeners are
//! process-level concerns of the host; the core records through the
//! `tracing` and `metrics` facades only.

pub mod metrics;
pub mod tracing;

pub use tracing::init_tracing;
