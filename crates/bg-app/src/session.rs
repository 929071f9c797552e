//! Per-run catalog session: the one-shot load, the loading flag and the query.

use std::sync::Arc;

use bg_core::catalog::{CatalogEntry, CatalogView};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::usecases::FetchCatalog;

/// State behind a catalog screen.
///
/// The catalog is fetched at most once per session and never changes after
/// that; only the query moves.
pub struct CatalogSession {
    fetch: FetchCatalog,
    entries: OnceCell<Arc<[CatalogEntry]>>,
    query: String,
}

impl CatalogSession {
    pub fn new(fetch: FetchCatalog) -> Self {
        Self {
            fetch,
            entries: OnceCell::new(),
            query: String::new(),
        }
    }

    /// True until the catalog load has resolved.
    pub fn is_loading(&self) -> bool {
        !self.entries.initialized()
    }

    /// Resolve the catalog, fetching it on the first call only.
    ///
    /// Concurrent callers wait for the same fetch.
    pub async fn load(&self) -> Arc<[CatalogEntry]> {
        self.entries
            .get_or_init(|| async {
                let entries = self.fetch.execute().await;
                debug!(entries = entries.len(), "Catalog session loaded");
                Arc::from(entries)
            })
            .await
            .clone()
    }

    /// The full catalog, or `None` while loading.
    pub fn entries(&self) -> Option<&[CatalogEntry]> {
        self.entries.get().map(|entries| &entries[..])
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// What should be on screen right now.
    pub fn view(&self) -> CatalogView {
        CatalogView::resolve(self.entries(), &self.query)
    }
}
