use super::entry::CatalogEntry;

/// Keep the entries whose title or author contains `query`, ignoring case.
///
/// The result preserves the order of `entries`. An empty query keeps every
/// entry, including those with neither a title nor an author.
pub fn filter_entries(entries: &[CatalogEntry], query: &str) -> Vec<CatalogEntry> {
    if query.is_empty() {
        return entries.to_vec();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.matches_lowercase(&needle))
        .cloned()
        .collect()
}
