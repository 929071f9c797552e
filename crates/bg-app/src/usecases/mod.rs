//! Business logic use cases

pub mod fetch_catalog;

pub use fetch_catalog::FetchCatalog;
