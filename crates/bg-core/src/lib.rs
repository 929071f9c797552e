//! # bg-core
//!
//! Core domain models and business logic for BukuGo.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the catalog entry model, the fallback dataset, query filtering, the three-state
//! view and the card projection used by front ends.

pub mod catalog;
pub mod config;
pub mod ports;

// Re-export commonly used types at the crate root
pub use catalog::{
    fallback_catalog, filter_entries, CatalogCard, CatalogEntry, CatalogView, EntryId,
    FALLBACK_CATALOG_LEN,
};
pub use config::CatalogConfig;
pub use ports::{CatalogSourceError, CatalogSourcePort};
