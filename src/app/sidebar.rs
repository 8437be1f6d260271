//! Sidebar navigation overlay.
//!
//! Each screen that composes the sidebar owns one; it is closed on mount. Selecting
//! an item is handled by the root state, which navigates first and then closes the
//! overlay so it never survives a navigation.

use crate::domain::ScreenId;

/// Menu entries as `(target, label)`, in display order.
pub const SIDEBAR_ITEMS: [(ScreenId, &str); 4] = [
    (ScreenId::Home, "Home"),
    (ScreenId::FindJobs, "Jobs"),
    (ScreenId::Resources, "Resources"),
    (ScreenId::Profile, "Profile"),
];

/// Open/closed state and keyboard cursor of the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sidebar {
    open: bool,
    cursor: usize,
}

impl Sidebar {
    /// Opens the overlay with the cursor on the entry for `current`, if listed.
    pub fn open(&mut self, current: ScreenId) {
        self.open = true;
        self.cursor = SIDEBAR_ITEMS
            .iter()
            .position(|(id, _)| *id == current)
            .unwrap_or(0);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self, current: ScreenId) {
        if self.open {
            self.close();
        } else {
            self.open(current);
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % SIDEBAR_ITEMS.len();
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or(SIDEBAR_ITEMS.len() - 1);
    }

    /// The screen under the cursor.
    #[must_use]
    pub fn highlighted(&self) -> ScreenId {
        SIDEBAR_ITEMS[self.cursor % SIDEBAR_ITEMS.len()].0
    }
}
