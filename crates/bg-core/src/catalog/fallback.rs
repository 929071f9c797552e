//! Built-in catalog used whenever the remote backend is unavailable or empty.

use super::entry::CatalogEntry;

/// Number of records in [`fallback_catalog`].
pub const FALLBACK_CATALOG_LEN: usize = 10;

/// The fixed fallback dataset, in display order.
pub fn fallback_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(1, "Neural Networks & Deep Learning", "Dr. A. Turing", 5, 4.5),
        CatalogEntry::new(2, "The Martian Chronicles 2099", "Ray Bradbury AI", 2, 4.5),
        CatalogEntry::new(3, "Quantum Computing for Beginners", "Schrodinger's Cat", 0, 4.9),
        CatalogEntry::new(4, "Cybersecurity in the Metaverse", "Neo Anderson", 12, 4.2),
        CatalogEntry::new(5, "Sustainable Energy Systems", "Elon Musk V2", 8, 4.5),
        CatalogEntry::new(6, "Designing for AR/VR Interfaces", "Jony Ive Holo", 3, 4.6),
        CatalogEntry::new(7, "History of the Internet (Ancient)", "Tim Berners-Lee", 1, 5.0),
        CatalogEntry::new(8, "Robotics Engineering 101", "Asimov Bot", 6, 4.3),
        CatalogEntry::new(9, "Space Mining Logistics", "Weyland Yutani", 4, 4.3),
        CatalogEntry::new(10, "Synthetic Biology Ethics", "Dr. Frankenstein", 9, 4.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntryId;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_has_ten_entries() {
        assert_eq!(fallback_catalog().len(), FALLBACK_CATALOG_LEN);
    }

    #[test]
    fn test_fallback_ids_are_unique() {
        let ids: HashSet<EntryId> = fallback_catalog()
            .into_iter()
            .filter_map(|entry| entry.id)
            .collect();

        assert_eq!(ids.len(), FALLBACK_CATALOG_LEN);
    }

    #[test]
    fn test_fallback_entries_are_fully_populated() {
        for entry in fallback_catalog() {
            assert!(entry.title.is_some());
            assert!(entry.author.is_some());
            assert!(entry.copies_available.is_some());
            assert!(entry.rating.is_some());
        }
    }

    #[test]
    fn test_fallback_contains_an_unavailable_title() {
        assert!(fallback_catalog().iter().any(|entry| !entry.is_available()));
    }
}
