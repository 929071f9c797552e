use super::entry::CatalogEntry;

/// Shown when an entry has no title.
pub const UNKNOWN_TITLE: &str = "Unknown_Data";
/// Shown when an entry has no author.
pub const UNKNOWN_AUTHOR: &str = "Unknown_Entity";
/// Shown when an entry has no rating.
pub const UNKNOWN_RATING: &str = "N/A";

const LABEL_WIDTH: usize = 4;

/// Display projection of a single catalog entry.
///
/// Blank titles/authors and a zero rating are treated like absent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCard {
    /// `ID_` followed by the id, zero-padded to four characters.
    pub label: String,
    pub title: String,
    pub author: String,
    pub available: bool,
    pub rating: String,
}

impl CatalogCard {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let id = entry
            .id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        Self {
            label: format!("ID_{:0>width$}", id, width = LABEL_WIDTH),
            title: text_or(entry.title.as_deref(), UNKNOWN_TITLE),
            author: text_or(entry.author.as_deref(), UNKNOWN_AUTHOR),
            available: entry.is_available(),
            rating: match entry.rating {
                Some(rating) if rating != 0.0 && !rating.is_nan() => rating.to_string(),
                _ => UNKNOWN_RATING.to_string(),
            },
        }
    }
}

fn text_or(value: Option<&str>, sentinel: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => sentinel.to_string(),
    }
}
