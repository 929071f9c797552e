use super::entry::CatalogEntry;
use super::filter::filter_entries;

/// What a front end should show for the catalog at a given moment.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    /// The catalog has not been resolved yet.
    Loading,
    /// The catalog is resolved but nothing matches the current query.
    Empty,
    /// Matching entries, in catalog order.
    Populated(Vec<CatalogEntry>),
}

impl CatalogView {
    /// Derive the view from the (possibly still loading) catalog and the query.
    pub fn resolve(entries: Option<&[CatalogEntry]>, query: &str) -> Self {
        let Some(entries) = entries else {
            return CatalogView::Loading;
        };

        let visible = filter_entries(entries, query);
        if visible.is_empty() {
            CatalogView::Empty
        } else {
            CatalogView::Populated(visible)
        }
    }

    /// Number of visible entries; zero while loading.
    pub fn entry_count(&self) -> usize {
        match self {
            CatalogView::Populated(entries) => entries.len(),
            CatalogView::Loading | CatalogView::Empty => 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogView::Loading)
    }
}
