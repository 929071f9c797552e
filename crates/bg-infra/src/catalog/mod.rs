//! Catalog source adapters: the hosted row store and the unconfigured stub.

mod stub;
mod supabase;

pub use stub::StubCatalogSource;
pub use supabase::SupabaseCatalogSource;
