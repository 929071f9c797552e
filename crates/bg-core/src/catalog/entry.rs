use std::fmt;

use serde::{Deserialize, Serialize};

use super::lenient;

/// Identifier of a catalog entry.
///
/// Remote rows may carry either a numeric or a textual primary key, so both
/// shapes are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Int(id) => write!(f, "{}", id),
            EntryId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for EntryId {
    fn from(id: i64) -> Self {
        EntryId::Int(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        EntryId::Text(id.to_string())
    }
}

/// One book record of the catalog.
///
/// Every field is optional: rows coming from the backend are used verbatim and
/// display code substitutes sentinels for whatever is missing.
/// Columns not listed here are ignored when decoding a row, and a column of an
/// unexpected type decodes as absent rather than failing the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(
        default,
        deserialize_with = "lenient::id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<EntryId>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::count",
        skip_serializing_if = "Option::is_none"
    )]
    pub copies_available: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,
}

impl CatalogEntry {
    /// Create a fully populated entry.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        copies_available: i64,
        rating: f64,
    ) -> Self {
        Self {
            id: Some(EntryId::Int(id)),
            title: Some(title.into()),
            author: Some(author.into()),
            copies_available: Some(copies_available),
            rating: Some(rating),
        }
    }

    /// Copies on the shelf; an absent count reads as zero.
    pub fn copies_available(&self) -> i64 {
        self.copies_available.unwrap_or(0)
    }

    pub fn is_available(&self) -> bool {
        self.copies_available() > 0
    }

    /// Whether the lower-cased title or author contains `needle`.
    ///
    /// `needle` must already be lower-cased. Absent fields never match.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(needle))
        };
        contains(&self.title) || contains(&self.author)
    }
}
