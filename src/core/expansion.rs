//! Per-section expand/collapse state for the sidebar.

use std::collections::HashMap;

/// Mapping from section id to expanded flag.
///
/// Seeded once at shell construction with the default-expanded set, mutated
/// only by explicit user toggles, and never persisted across sessions.
/// Absent keys read as collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashMap<String, bool>,
}

impl ExpansionState {
    /// State with the given section ids expanded and everything else
    /// collapsed.
    pub fn seeded(ids: &[&str]) -> Self {
        Self {
            expanded: ids.iter().map(|id| (id.to_string(), true)).collect(),
        }
    }

    /// Whether a section is currently expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    /// Flip the stored flag for a section.
    ///
    /// A section that was never toggled and is not in the seed set reads as
    /// collapsed, so its first toggle expands it.
    pub fn toggle(&mut self, id: &str) {
        let flag = self.expanded.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sections_are_expanded() {
        let state = ExpansionState::seeded(&["getting-started"]);
        assert!(state.is_expanded("getting-started"));
        assert!(!state.is_expanded("cloud-integration"));
    }

    #[test]
    fn test_toggle_sequence() {
        let mut state = ExpansionState::seeded(&["getting-started"]);

        state.toggle("cloud-integration");
        assert!(state.is_expanded("cloud-integration"));

        state.toggle("getting-started");
        assert!(!state.is_expanded("getting-started"));
    }

    #[test]
    fn test_double_toggle_restores_value() {
        let mut state = ExpansionState::seeded(&["getting-started"]);

        for id in ["getting-started", "never-touched"] {
            let before = state.is_expanded(id);
            state.toggle(id);
            state.toggle(id);
            assert_eq!(state.is_expanded(id), before);
        }
    }
}
