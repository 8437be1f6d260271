//! Input modes.
//!
//! The mode is derived from the mounted screen rather than stored: it follows
//! from whether an overlay is open and what currently has focus. It decides how
//! the shim interprets keys and which hints the footer shows.
//!
//! - **Idle**: nothing to interact with (splash screen)
//! - **Normal**: focus on a button, toggle or chip
//! - **Editing**: focus on a text field; printable keys are typed
//! - **Menu**: sidebar overlay open; arrows move its cursor

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// No focusable element is on screen.
    Idle,

    /// Focus on a non-text control.
    ///
    /// Available keybindings: Tab/j/Down (next), Shift+Tab/k/Up (previous),
    /// Enter/Space (activate), Ctrl+b (menu), Esc/q (hide).
    Normal,

    /// Focus on a text field.
    ///
    /// Printable characters are typed into the field; `j`, `k`, `q` and space
    /// lose their shortcut meaning.
    Editing,

    /// Sidebar overlay open.
    ///
    /// Available keybindings: Up/Down or j/k (move), Enter (open), Esc (close).
    Menu,
}
