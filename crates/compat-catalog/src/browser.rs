//! Transient per-session view state.

use crate::catalog::Catalog;
use crate::filter::ManufacturerFilter;
use crate::record::{BoardId, CompatibilityRecord};

/// UI state of one browsing session.
///
/// Created when the view mounts, mutated synchronously on user input and
/// discarded on exit. The visible record selection is derived on demand
/// through [`BrowserState::visible`] rather than stored, so the state can
/// never drift out of sync with the catalog.
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    /// Current search text. Replaced verbatim - no trimming or validation.
    pub search_term: String,
    /// Active manufacturer filter.
    pub manufacturer: ManufacturerFilter,
    /// Row whose detail block is expanded, if any. At most one row is
    /// expanded at a time.
    pub expanded: Option<BoardId>,
}

impl BrowserState {
    /// Fresh session state: empty search, all manufacturers, nothing
    /// expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text unconditionally.
    pub fn set_search_term(&mut self, text: String) {
        self.search_term = text;
    }

    /// Replace the manufacturer filter unconditionally.
    ///
    /// Membership in the catalog's manufacturer set is not checked; an
    /// unknown manufacturer degrades to an empty visible selection.
    pub fn select_manufacturer(&mut self, manufacturer: ManufacturerFilter) {
        self.manufacturer = manufacturer;
    }

    /// Toggle the detail block of a row.
    ///
    /// Collapses the row if it is the one currently expanded, otherwise
    /// expands it - implicitly collapsing any other row.
    pub fn toggle_expanded(&mut self, id: BoardId) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Whether the given row's detail block is expanded.
    pub fn is_expanded(&self, id: BoardId) -> bool {
        self.expanded == Some(id)
    }

    /// The records currently visible under this state, in catalog order.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<(BoardId, &'a CompatibilityRecord)> {
        catalog.filter(&self.search_term, &self.manufacturer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_all_collapsed() {
        let state = BrowserState::new();
        assert_eq!(state.search_term, "");
        assert_eq!(state.manufacturer, ManufacturerFilter::All);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let mut state = BrowserState::new();
        let id = BoardId(1);
        state.toggle_expanded(id);
        assert_eq!(state.expanded, Some(id));
        state.toggle_expanded(id);
        assert_eq!(state.expanded, None);
    }

    #[test]
    fn expanding_another_row_collapses_the_first() {
        let mut state = BrowserState::new();
        state.toggle_expanded(BoardId(0));
        state.toggle_expanded(BoardId(2));
        assert_eq!(state.expanded, Some(BoardId(2)));
        assert!(state.is_expanded(BoardId(2)));
        assert!(!state.is_expanded(BoardId(0)));
    }

    #[test]
    fn search_term_is_replaced_verbatim() {
        let mut state = BrowserState::new();
        state.set_search_term("  i5-6400 ".to_string());
        assert_eq!(state.search_term, "  i5-6400 ");
    }

    #[test]
    fn visible_derives_through_the_filter_engine() {
        let catalog = Catalog::builtin();
        let mut state = BrowserState::new();
        assert_eq!(state.visible(&catalog).len(), 4);

        state.set_search_term("i5-6400".to_string());
        assert_eq!(state.visible(&catalog).len(), 3);

        state.select_manufacturer(ManufacturerFilter::Only("MSI".to_string()));
        let visible = state.visible(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1.board, "MSI H110M PRO-VD");
    }

    #[test]
    fn expanded_row_survives_filter_changes() {
        // Filtering does not touch expansion state; a row filtered out of
        // view stays marked expanded and reappears expanded.
        let mut state = BrowserState::new();
        state.toggle_expanded(BoardId(3));
        state.set_search_term("gigabyte".to_string());
        assert_eq!(state.expanded, Some(BoardId(3)));
    }
}
