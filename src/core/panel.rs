//! Navigation panel state machine.
//!
//! Purely logical: whether the panel is visible on wide viewports is a
//! rendering policy decided by the layout, not by this machine.

/// Visibility state of the navigation panel on narrow viewports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    Open,
    #[default]
    Closed,
}

/// Discrete user events driving [`PanelState`] transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    /// The hamburger button in the top bar was pressed.
    ToggleButtonPressed,
    /// A navigation entry was activated; the panel auto-dismisses.
    EntryActivated,
    /// The dimmed backdrop shown while open was clicked.
    OverlayClicked,
}

impl PanelState {
    /// Apply a user event, returning the next state.
    ///
    /// Transitions are synchronous; there are no timers or cancellation
    /// semantics.
    pub fn apply(self, event: PanelEvent) -> Self {
        match event {
            PanelEvent::ToggleButtonPressed => match self {
                Self::Open => Self::Closed,
                Self::Closed => Self::Open,
            },
            PanelEvent::EntryActivated | PanelEvent::OverlayClicked => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        assert_eq!(
            PanelState::Closed.apply(PanelEvent::ToggleButtonPressed),
            PanelState::Open
        );
        assert_eq!(
            PanelState::Open.apply(PanelEvent::ToggleButtonPressed),
            PanelState::Closed
        );
    }

    #[test]
    fn test_entry_activation_always_closes() {
        assert_eq!(
            PanelState::Open.apply(PanelEvent::EntryActivated),
            PanelState::Closed
        );
        assert_eq!(
            PanelState::Closed.apply(PanelEvent::EntryActivated),
            PanelState::Closed
        );
    }

    #[test]
    fn test_overlay_click_closes() {
        assert_eq!(
            PanelState::Open.apply(PanelEvent::OverlayClicked),
            PanelState::Closed
        );
    }
}
