//! Infrastructure Layer
//!
//! Adapters implementing the domain repository traits and the application
//! ports. The durable store backing a deployment is a collaborator choice;
//! the in-memory adapter is the reference implementation of the contracts.

pub mod persistence;
