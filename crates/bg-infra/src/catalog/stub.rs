use async_trait::async_trait;
use bg_core::catalog::CatalogEntry;
use bg_core::ports::{CatalogSourceError, CatalogSourcePort};
use tracing::debug;

/// Stand-in used when no backend credentials are configured.
///
/// Every query succeeds with no rows, which sends callers down their
/// empty-catalog path deterministically.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubCatalogSource;

impl StubCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogSourcePort for StubCatalogSource {
    async fn query(&self, table: &str) -> Result<Vec<CatalogEntry>, CatalogSourceError> {
        debug!(table, "stub catalog source queried");
        Ok(Vec::new())
    }
}
