use std::collections::BTreeSet;

/// Which season positions are expanded in the series editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: BTreeSet<usize>,
}

impl ExpansionState {
    /// A brand-new series shows its first season expanded.
    pub fn for_create() -> Self {
        Self {
            open: BTreeSet::from([0]),
        }
    }

    pub fn for_edit() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, position: usize) {
        if !self.open.remove(&position) {
            self.open.insert(position);
        }
    }

    pub fn is_expanded(&self, position: usize) -> bool {
        self.open.contains(&position)
    }

    /// Drop `position` after its season was removed; later positions move
    /// up by one so they keep pointing at the same seasons.
    pub fn forget(&mut self, position: usize) {
        self.open = self
            .open
            .iter()
            .filter(|&&p| p != position)
            .map(|&p| if p > position { p - 1 } else { p })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_states() {
        assert!(ExpansionState::for_create().is_expanded(0));
        assert!(!ExpansionState::for_edit().is_expanded(0));
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut state = ExpansionState::for_edit();
        state.toggle(2);
        assert!(state.is_expanded(2));
        state.toggle(2);
        assert!(!state.is_expanded(2));
    }

    #[test]
    fn test_forget_shifts_later_positions() {
        let mut state = ExpansionState::for_create();
        state.toggle(2);
        state.toggle(3);
        state.forget(2);
        assert!(state.is_expanded(0));
        assert!(state.is_expanded(2));
        assert!(!state.is_expanded(3));

        state.forget(0);
        assert!(state.is_expanded(1));
        assert!(!state.is_expanded(0));
        assert!(!state.is_expanded(2));
    }
}
