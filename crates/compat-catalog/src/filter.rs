//! Filter predicates for the compatibility catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::CompatibilityRecord;

/// Manufacturer selection for the filter bar.
///
/// `Only` accepts any string without membership validation - an unknown
/// manufacturer simply matches no records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManufacturerFilter {
    /// No manufacturer restriction.
    #[default]
    All,
    /// Restrict to records whose manufacturer equals this name exactly
    /// (case-sensitive; manufacturer values come from a closed set).
    Only(String),
}

impl ManufacturerFilter {
    /// Whether a record passes this manufacturer predicate.
    pub fn matches(&self, record: &CompatibilityRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => record.manufacturer == *name,
        }
    }

    /// Label for UI display.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "Все",
            Self::Only(name) => name,
        }
    }
}

impl fmt::Display for ManufacturerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether a record matches the search term.
///
/// Case-insensitive substring match against the board name or any
/// supported-CPU entry. The empty string matches everything.
pub(crate) fn matches_search(record: &CompatibilityRecord, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    record.board.to_lowercase().contains(&needle)
        || record
            .supported_cpus
            .iter()
            .any(|cpu| cpu.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(board: &str, manufacturer: &str, cpus: &[&str]) -> CompatibilityRecord {
        CompatibilityRecord {
            board: board.to_string(),
            manufacturer: manufacturer.to_string(),
            socket: "LGA1151".to_string(),
            chipset: "H110".to_string(),
            supported_cpus: cpus.iter().map(|&c| c.to_string()).collect(),
            max_ram: "32GB".to_string(),
            ram_slots: 2,
            form_factor: "Micro-ATX".to_string(),
            price: None,
            features: Vec::new(),
        }
    }

    #[test]
    fn empty_search_matches_everything() {
        let r = record("ASUS H110M-K", "ASUS", &["Intel Core i3-6100"]);
        assert!(matches_search(&r, ""));
    }

    #[test]
    fn search_is_case_insensitive() {
        let r = record("ASUS H110M-K", "ASUS", &["Intel Core i3-6100"]);
        assert!(matches_search(&r, "asus"));
        assert!(matches_search(&r, "ASUS"));
        assert!(matches_search(&r, "h110m"));
    }

    #[test]
    fn search_covers_cpu_entries() {
        let r = record("ASUS H110M-K", "ASUS", &["Intel Core i5-6400"]);
        assert!(matches_search(&r, "i5-6400"));
        assert!(!matches_search(&r, "i7-7700"));
    }

    #[test]
    fn manufacturer_only_is_exact_and_case_sensitive() {
        let r = record("MSI H110M PRO-VD", "MSI", &["Intel Pentium G4400"]);
        assert!(ManufacturerFilter::All.matches(&r));
        assert!(ManufacturerFilter::Only("MSI".to_string()).matches(&r));
        assert!(!ManufacturerFilter::Only("msi".to_string()).matches(&r));
        assert!(!ManufacturerFilter::Only("ASUS".to_string()).matches(&r));
    }

    #[test]
    fn unknown_manufacturer_matches_nothing() {
        let r = record("MSI H110M PRO-VD", "MSI", &["Intel Pentium G4400"]);
        assert!(!ManufacturerFilter::Only("Biostar".to_string()).matches(&r));
    }
}
