//! Infrastructure adapters for BukuGo.

pub mod catalog;

pub use catalog::{StubCatalogSource, SupabaseCatalogSource};
