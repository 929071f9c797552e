use std::sync::Arc;

use bg_core::catalog::{fallback_catalog, CatalogEntry};
use bg_core::ports::CatalogSourcePort;
use tracing::{info, info_span, warn, Instrument};

/// Use case resolving the catalog for this run.
///
/// ## Behavior
/// - Selects every row of the configured table from the catalog source
/// - Returns the rows verbatim when there is at least one
/// - Returns the built-in fallback catalog when the source fails or is empty
///
/// The caller never sees an error and is not told which branch was taken.
pub struct FetchCatalog {
    source: Arc<dyn CatalogSourcePort>,
    table: String,
}

impl FetchCatalog {
    pub fn new(source: Arc<dyn CatalogSourcePort>, table: impl Into<String>) -> Self {
        Self {
            source,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Execute the use case.
    pub async fn execute(&self) -> Vec<CatalogEntry> {
        let span = info_span!("usecase.fetch_catalog.execute", table = %self.table);

        async {
            match self.source.query(&self.table).await {
                Ok(rows) if !rows.is_empty() => {
                    info!(rows = rows.len(), "Loaded catalog from remote source");
                    rows
                }
                Ok(_) => {
                    info!("Remote catalog is empty, using fallback catalog");
                    fallback_catalog()
                }
                Err(err) => {
                    warn!(error = %err, "Remote catalog unavailable, using fallback catalog");
                    fallback_catalog()
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bg_core::catalog::FALLBACK_CATALOG_LEN;
    use async_trait::async_trait;
    use bg_core::ports::CatalogSourceError;

    mockall::mock! {
        Source {}

        #[async_trait]
        impl CatalogSourcePort for Source {
            async fn query(&self, table: &str) -> Result<Vec<CatalogEntry>, CatalogSourceError>;
        }
    }

    fn use_case(source: MockSource) -> FetchCatalog {
        FetchCatalog::new(Arc::new(source), "books")
    }

    #[tokio::test]
    async fn test_execute_returns_remote_rows_verbatim() {
        let rows = vec![
            CatalogEntry::new(100, "Dune", "Frank Herbert", 1, 4.8),
            CatalogEntry {
                title: Some("Untitled row".to_string()),
                ..Default::default()
            },
        ];
        let expected = rows.clone();

        let mut source = MockSource::new();
        source
            .expect_query()
            .withf(|table| table.to_string() == "books")
            .times(1)
            .returning(move |_| Ok(rows.clone()));

        assert_eq!(use_case(source).execute().await, expected);
    }

    #[tokio::test]
    async fn test_execute_falls_back_on_empty_result() {
        let mut source = MockSource::new();
        source.expect_query().returning(|_| Ok(Vec::new()));

        let entries = use_case(source).execute().await;

        assert_eq!(entries.len(), FALLBACK_CATALOG_LEN);
        assert_eq!(entries, fallback_catalog());
    }

    #[tokio::test]
    async fn test_execute_falls_back_on_backend_error() {
        let mut source = MockSource::new();
        source.expect_query().returning(|_| {
            Err(CatalogSourceError::Backend {
                status: 500,
                message: "internal error".to_string(),
            })
        });

        assert_eq!(use_case(source).execute().await, fallback_catalog());
    }

    #[tokio::test]
    async fn test_execute_falls_back_on_transport_error() {
        let mut source = MockSource::new();
        source
            .expect_query()
            .returning(|_| Err(CatalogSourceError::Transport("connection refused".to_string())));

        assert_eq!(use_case(source).execute().await, fallback_catalog());
    }

    #[tokio::test]
    async fn test_execute_queries_configured_table() {
        let mut source = MockSource::new();
        source
            .expect_query()
            .withf(|table| table.to_string() == "library_books")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let use_case = FetchCatalog::new(Arc::new(source), "library_books");
        assert_eq!(use_case.table(), "library_books");
        use_case.execute().await;
    }
}
