//! Plain-text rendering of the catalog view.

use std::io::{self, Write};

use bg_core::catalog::{CatalogCard, CatalogView};

pub const LOADING_PLACEHOLDER: &str = "LOADING_ARCHIVE...";
pub const NO_MATCHES: &str = "NO_MATCHES_FOUND_IN_ARCHIVE";
pub const PROMPT: &str = "Query database> ";

/// Write the header and the body for `view`.
pub fn render_view<W: Write>(view: &CatalogView, query: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "BukuGo v2.0 // Neural Library System")?;
    if !query.is_empty() {
        writeln!(out, "QUERY: {query}")?;
    }
    writeln!(out, "DATA_ARCHIVE  ENTRIES: {}", view.entry_count())?;
    writeln!(out, "{}", "-".repeat(40))?;

    match view {
        CatalogView::Loading => writeln!(out, "{LOADING_PLACEHOLDER}")?,
        CatalogView::Empty => writeln!(out, "{NO_MATCHES}")?,
        CatalogView::Populated(entries) => {
            for entry in entries {
                render_card(&CatalogCard::from_entry(entry), out)?;
            }
        }
    }
    Ok(())
}

fn render_card<W: Write>(card: &CatalogCard, out: &mut W) -> io::Result<()> {
    let status = if card.available { "AVAILABLE" } else { "UNAVAILABLE" };
    writeln!(out, "{}  [{}]", card.label, status)?;
    writeln!(out, "  {}", card.title)?;
    writeln!(out, "  by {}", card.author)?;
    writeln!(out, "  RATING: {}/5.0", card.rating)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bg_core::catalog::CatalogEntry;

    fn rendered(view: &CatalogView, query: &str) -> String {
        let mut out = Vec::new();
        render_view(view, query, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_loading_renders_placeholder() {
        let text = rendered(&CatalogView::Loading, "");

        assert!(text.contains(LOADING_PLACEHOLDER));
        assert!(text.contains("ENTRIES: 0"));
    }

    #[test]
    fn test_empty_renders_no_matches() {
        let text = rendered(&CatalogView::Empty, "xyz");

        assert!(text.contains(NO_MATCHES));
        assert!(text.contains("QUERY: xyz"));
        assert!(!text.contains(LOADING_PLACEHOLDER));
    }

    #[test]
    fn test_populated_renders_cards() {
        let view = CatalogView::Populated(vec![
            CatalogEntry::new(3, "Quantum Computing for Beginners", "Schrodinger's Cat", 0, 4.9),
            CatalogEntry::default(),
        ]);

        let text = rendered(&view, "");

        assert!(text.contains("ENTRIES: 2"));
        assert!(text.contains("ID_0003  [UNAVAILABLE]"));
        assert!(text.contains("  by Schrodinger's Cat"));
        assert!(text.contains("  RATING: 4.9/5.0"));
        assert!(text.contains("  Unknown_Data"));
        assert!(text.contains("  by Unknown_Entity"));
        assert!(text.contains("  RATING: N/A/5.0"));
    }
}
