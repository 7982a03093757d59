//! Interactive page state.
//!
//! The root view owns a single [`PageState`] and every interaction funnels
//! through its methods: scroll events update the active section, navigation
//! requests resolve their target and close the mobile menu, and the menu
//! button toggles visibility. Nothing else mutates this state.

use crate::models::SectionId;
use crate::tracker::{self, SectionBounds};

/// Mutable state of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    active_section: SectionId,
    menu_open: bool,
}

impl PageState {
    /// Initial state: the hero is active and the mobile menu is closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active_section: SectionId::Hero,
            menu_open: false,
        }
    }

    /// The section currently highlighted in the navigation bar.
    #[must_use]
    pub const fn active_section(&self) -> SectionId {
        self.active_section
    }

    /// Whether the mobile menu panel is visible.
    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Applies a scroll measurement.
    ///
    /// `bounds` holds the viewport-relative geometry of each rendered
    /// section in registry order; sections missing from the DOM are simply
    /// absent from the slice. The active section is left unchanged when no
    /// section crosses the reference line.
    pub fn record_scroll(&mut self, bounds: &[(SectionId, SectionBounds)]) {
        self.active_section = tracker::active_section(self.active_section, bounds);
    }

    /// Handles a navigation request for the given section id string.
    ///
    /// Always closes the mobile menu, whatever the prior state and whether
    /// or not the id is known. Returns the resolved target for the caller
    /// to scroll to, or `None` for ids outside the registry — an unknown id
    /// is a silent no-op, not an error.
    pub fn navigate(&mut self, raw_id: &str) -> Option<SectionId> {
        self.menu_open = false;
        SectionId::parse(raw_id)
    }

    /// Flips the mobile menu visibility.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}
