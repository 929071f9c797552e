//! Catalog domain: entries, the fallback dataset, filtering and view projections.

mod card;
mod entry;
mod fallback;
mod filter;
mod lenient;
mod view;

pub use card::{CatalogCard, UNKNOWN_AUTHOR, UNKNOWN_RATING, UNKNOWN_TITLE};
pub use entry::{CatalogEntry, EntryId};
pub use fallback::{fallback_catalog, FALLBACK_CATALOG_LEN};
pub use filter::filter_entries;
pub use view::CatalogView;
