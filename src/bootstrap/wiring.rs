//! # Dependency wiring
//!
//! The only place that picks concrete adapters. The catalog source is chosen
//! once from configuration: the hosted backend when both the URL and the key
//! are present, the stub otherwise.

use std::sync::Arc;

use bg_app::{CatalogSession, FetchCatalog};
use bg_core::config::CatalogConfig;
use bg_core::ports::CatalogSourcePort;
use bg_infra::{StubCatalogSource, SupabaseCatalogSource};
use tracing::{info, warn};

/// Table queried when configuration does not name one.
pub const DEFAULT_CATALOG_TABLE: &str = "books";

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Select the catalog source for this run.
pub fn build_catalog_source(config: &CatalogConfig) -> Arc<dyn CatalogSourcePort> {
    let source: Arc<dyn CatalogSourcePort> = match (
        non_empty(&config.supabase_url),
        non_empty(&config.anon_key),
    ) {
        (Some(url), Some(key)) => {
            info!(url, "Using hosted catalog backend");
            Arc::new(SupabaseCatalogSource::new(url, key))
        }
        _ => {
            warn!("Supabase environment variables are missing. Catalog will load with no remote data.");
            Arc::new(StubCatalogSource::new())
        }
    };
    source
}

/// Assemble a catalog session from configuration.
pub fn build_session(config: &CatalogConfig) -> CatalogSession {
    let table = non_empty(&config.table).unwrap_or(DEFAULT_CATALOG_TABLE);
    CatalogSession::new(FetchCatalog::new(build_catalog_source(config), table))
}
