//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, so the catalog logic never depends on
//! a concrete backend client.

pub mod catalog_source;

pub use catalog_source::{CatalogSourceError, CatalogSourcePort};
