//! # Catalog configuration DTO
//!
//! Data only: this module maps TOML into [`CatalogConfig`] and carries no
//! validation or default values. Deciding what an empty or missing value means
//! belongs to the wiring layer.

/// Backend connection settings as read from configuration sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL of the hosted row-store service.
    pub supabase_url: Option<String>,

    /// Public access key sent with every request.
    pub anon_key: Option<String>,

    /// Table holding the catalog rows.
    pub table: Option<String>,
}

impl CatalogConfig {
    /// Create CatalogConfig from a TOML value.
    ///
    /// Reads the `[supabase]` table. Missing keys stay `None`; strings are
    /// taken as they are, empty ones included.
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        let section = toml_value.get("supabase");
        let read = |key: &str| {
            section
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Self {
            supabase_url: read("url"),
            anon_key: read("anon_key"),
            table: read("table"),
        }
    }

    /// Overlay `other` on top of `self`: values present in `other` win.
    pub fn merged_with(self, other: CatalogConfig) -> Self {
        Self {
            supabase_url: other.supabase_url.or(self.supabase_url),
            anon_key: other.anon_key.or(self.anon_key),
            table: other.table.or(self.table),
        }
    }
}
