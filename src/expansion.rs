//! Expansion State
//!
//! One-hot selector for "which card in a section shows its details".

/// At most one expanded item per section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: Option<usize>,
}

impl ExpansionState {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Collapse `index` if it is open, otherwise open it (closing any other).
    /// Any index is accepted, including ones without detail text.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) { None } else { Some(index) };
    }
}

/// True only on the collapsed -> expanded edge
pub fn entered_expanded(previous: Option<bool>, expanded: bool) -> bool {
    expanded && !previous.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MenuItem, Price};

    fn expanded_count(state: &ExpansionState, len: usize) -> usize {
        (0..len).filter(|i| state.is_expanded(*i)).count()
    }

    #[test]
    fn test_initially_collapsed() {
        let state = ExpansionState::default();
        assert_eq!(state.expanded(), None);
        assert_eq!(expanded_count(&state, 4), 0);
    }

    #[test]
    fn test_mutual_exclusion() {
        let mut state = ExpansionState::default();
        let sequence = [0, 3, 3, 1, 2, 2, 2, 0, 1, 1, 3];
        for index in sequence {
            state.toggle(index);
            assert!(expanded_count(&state, 4) <= 1);
        }
    }

    #[test]
    fn test_toggle_twice_restores() {
        for start in [None, Some(0), Some(2)] {
            let mut state = ExpansionState::default();
            if let Some(i) = start {
                state.toggle(i);
            }
            let before = state;
            state.toggle(1);
            state.toggle(1);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_switch_expands_new_and_collapses_old() {
        let mut state = ExpansionState::default();
        state.toggle(0);
        state.toggle(2);
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(0));
        assert_eq!(state.expanded(), Some(2));
    }

    #[test]
    fn test_scroll_edge_only() {
        assert!(!entered_expanded(None, false));
        assert!(entered_expanded(None, true));
        assert!(entered_expanded(Some(false), true));
        // Still expanded: no repeat scroll
        assert!(!entered_expanded(Some(true), true));
        assert!(!entered_expanded(Some(true), false));
    }

    #[test]
    fn test_section_scenario() {
        let item = |name: &str, detail: Option<&str>| MenuItem {
            name: name.to_string(),
            price: Price::Amount(100),
            short_text: String::new(),
            detail_text: detail.map(str::to_string),
            badge: None,
            portion_note: None,
        };
        let items = vec![item("A", Some("dA")), item("B", None), item("C", Some("dC"))];
        let shown = |state: &ExpansionState| {
            items
                .iter()
                .enumerate()
                .map(|(i, it)| it.shown_detail(state.is_expanded(i)))
                .collect::<Vec<_>>()
        };

        let mut state = ExpansionState::default();
        assert_eq!(shown(&state), vec![None, None, None]);
        assert!(!items[1].has_detail());

        state.toggle(0);
        assert_eq!(shown(&state), vec![Some("dA"), None, None]);

        state.toggle(2);
        assert_eq!(shown(&state), vec![None, None, Some("dC")]);

        state.toggle(2);
        assert_eq!(shown(&state), vec![None, None, None]);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn test_toggle_item_without_detail_is_accepted() {
        let mut state = ExpansionState::default();
        state.toggle(0);
        // B has no detail; a direct toggle still follows the one-hot rule
        state.toggle(1);
        assert_eq!(state.expanded(), Some(1));
        state.toggle(1);
        assert_eq!(state.expanded(), None);
    }
}
