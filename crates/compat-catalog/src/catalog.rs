//! The immutable record store and its filter engine.

use std::collections::HashSet;

use crate::builtin;
use crate::error::{CatalogError, Result};
use crate::filter::{ManufacturerFilter, matches_search};
use crate::record::{BoardId, CompatibilityRecord};

/// Immutable, ordered collection of compatibility records.
///
/// Constructed once at startup and read-only for the lifetime of the
/// view. Row identity ([`BoardId`]) is assigned in record order during
/// construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CompatibilityRecord>,
}

impl Catalog {
    /// Build a catalog from records, enforcing the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if a board name occurs twice, a record lists no
    /// supported CPUs, or a record has zero RAM slots.
    pub fn new(records: Vec<CompatibilityRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.board.as_str()) {
                return Err(CatalogError::DuplicateBoard {
                    board: record.board.clone(),
                });
            }
            if record.supported_cpus.is_empty() {
                return Err(CatalogError::NoSupportedCpus {
                    board: record.board.clone(),
                });
            }
            if record.ram_slots == 0 {
                return Err(CatalogError::NoRamSlots {
                    board: record.board.clone(),
                });
            }
        }
        Ok(Self { records })
    }

    /// The built-in H110 catalog shipped with the application.
    ///
    /// The embedded data is known-valid (covered by a test), so this
    /// cannot fail.
    pub fn builtin() -> Self {
        Self {
            records: builtin::h110_records(),
        }
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in catalog order, with their row identities.
    pub fn records(&self) -> impl Iterator<Item = (BoardId, &CompatibilityRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| (BoardId(idx), record))
    }

    /// Look up a record by row identity.
    pub fn get(&self, id: BoardId) -> Option<&CompatibilityRecord> {
        self.records.get(id.0)
    }

    /// Filter options for the manufacturer bar: `All` followed by the
    /// distinct manufacturers in first-occurrence order.
    pub fn manufacturer_options(&self) -> Vec<ManufacturerFilter> {
        let mut options = vec![ManufacturerFilter::All];
        let mut seen = HashSet::new();
        for record in &self.records {
            if seen.insert(record.manufacturer.as_str()) {
                options.push(ManufacturerFilter::Only(record.manufacturer.clone()));
            }
        }
        options
    }

    /// Select the records matching both the search term and the
    /// manufacturer filter, preserving catalog order.
    ///
    /// Pure and total: unknown manufacturers or unmatched search terms
    /// yield an empty vector, never an error.
    pub fn filter(
        &self,
        search_term: &str,
        manufacturer: &ManufacturerFilter,
    ) -> Vec<(BoardId, &CompatibilityRecord)> {
        self.records()
            .filter(|(_, record)| matches_search(record, search_term) && manufacturer.matches(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board_names(selection: &[(BoardId, &CompatibilityRecord)]) -> Vec<String> {
        selection
            .iter()
            .map(|(_, record)| record.board.clone())
            .collect()
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 4);
        // The embedded data must pass the same validation as external data.
        assert!(Catalog::new(builtin::h110_records()).is_ok());
    }

    #[test]
    fn duplicate_board_name_is_rejected() {
        let mut records = builtin::h110_records();
        let dup = records[0].clone();
        records.push(dup);
        let err = Catalog::new(records).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateBoard { board } if board == "ASUS H110M-K"));
    }

    #[test]
    fn empty_cpu_list_is_rejected() {
        let mut records = builtin::h110_records();
        records[1].supported_cpus.clear();
        let err = Catalog::new(records).unwrap_err();
        assert!(matches!(err, CatalogError::NoSupportedCpus { .. }));
    }

    #[test]
    fn zero_ram_slots_is_rejected() {
        let mut records = builtin::h110_records();
        records[2].ram_slots = 0;
        let err = Catalog::new(records).unwrap_err();
        assert!(matches!(err, CatalogError::NoRamSlots { .. }));
    }

    #[test]
    fn identity_filter_returns_all_records_in_order() {
        let catalog = Catalog::builtin();
        let all = catalog.filter("", &ManufacturerFilter::All);
        assert_eq!(
            board_names(&all),
            vec![
                "ASUS H110M-K",
                "MSI H110M PRO-VD",
                "Gigabyte GA-H110M-S2H",
                "ASRock H110M-DGS",
            ]
        );
    }

    #[test]
    fn search_is_case_insensitive_end_to_end() {
        let catalog = Catalog::builtin();
        let lower = catalog.filter("asus", &ManufacturerFilter::All);
        let upper = catalog.filter("ASUS", &ManufacturerFilter::All);
        assert_eq!(board_names(&lower), board_names(&upper));
        assert_eq!(board_names(&lower), vec!["ASUS H110M-K"]);
    }

    #[test]
    fn cpu_search_selects_boards_in_catalog_order() {
        let catalog = Catalog::builtin();
        let hits = catalog.filter("i5-6400", &ManufacturerFilter::All);
        assert_eq!(
            board_names(&hits),
            vec!["ASUS H110M-K", "MSI H110M PRO-VD", "Gigabyte GA-H110M-S2H"]
        );
    }

    #[test]
    fn manufacturer_filter_selects_exactly_one_msi_board() {
        let catalog = Catalog::builtin();
        let hits = catalog.filter("", &ManufacturerFilter::Only("MSI".to_string()));
        assert_eq!(board_names(&hits), vec!["MSI H110M PRO-VD"]);
    }

    #[test]
    fn unmatched_search_yields_empty_selection() {
        let catalog = Catalog::builtin();
        let hits = catalog.filter("zzz-nonexistent", &ManufacturerFilter::All);
        assert!(hits.is_empty());
    }

    #[test]
    fn unknown_manufacturer_yields_empty_selection() {
        let catalog = Catalog::builtin();
        let hits = catalog.filter("", &ManufacturerFilter::Only("Biostar".to_string()));
        assert!(hits.is_empty());
    }

    #[test]
    fn predicates_are_anded() {
        let catalog = Catalog::builtin();
        // "i5-6400" matches three boards, but only one of them is MSI.
        let hits = catalog.filter("i5-6400", &ManufacturerFilter::Only("MSI".to_string()));
        assert_eq!(board_names(&hits), vec!["MSI H110M PRO-VD"]);
    }

    #[test]
    fn manufacturer_options_start_with_all_and_have_no_duplicates() {
        let catalog = Catalog::builtin();
        let options = catalog.manufacturer_options();
        assert_eq!(options[0], ManufacturerFilter::All);
        assert_eq!(
            options[1..],
            [
                ManufacturerFilter::Only("ASUS".to_string()),
                ManufacturerFilter::Only("MSI".to_string()),
                ManufacturerFilter::Only("Gigabyte".to_string()),
                ManufacturerFilter::Only("ASRock".to_string()),
            ]
        );
        // Idempotent: deriving twice gives the same list.
        assert_eq!(options, catalog.manufacturer_options());
    }

    proptest! {
        /// Any filter result is a subsequence of the catalog in record
        /// order.
        #[test]
        fn filter_preserves_catalog_order(search in ".{0,24}", msi in proptest::bool::ANY) {
            let catalog = Catalog::builtin();
            let manufacturer = if msi {
                ManufacturerFilter::Only("MSI".to_string())
            } else {
                ManufacturerFilter::All
            };
            let hits = catalog.filter(&search, &manufacturer);
            let indices: Vec<usize> = hits.iter().map(|(id, _)| id.index()).collect();
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(indices.iter().all(|&i| i < catalog.len()));
        }
    }
}
