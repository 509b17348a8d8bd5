//! Catalog Bounded Context
//!
//! Product snapshots and the stock ledger. Catalog management (CRUD, name
//! dedup) is an external collaborator; only the stock bookkeeping that the
//! order workflows depend on lives here.

pub mod errors;
pub mod product;
pub mod repository;
pub mod stock_ledger;

pub use errors::CatalogError;
pub use product::Product;
pub use repository::ProductRepository;
