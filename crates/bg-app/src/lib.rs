//! BukuGo application layer
//!
//! This crate contains the catalog use cases and the per-run session state
//! that front ends drive.

pub mod session;
pub mod usecases;

pub use session::CatalogSession;
pub use usecases::FetchCatalog;
