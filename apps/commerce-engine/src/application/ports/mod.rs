//! Application Ports
//!
//! Interfaces the application layer requires from the outside world, beyond
//! the domain repository traits.

mod unit_of_work;

pub use unit_of_work::{CommitError, StagedWrites, UnitOfWork};
