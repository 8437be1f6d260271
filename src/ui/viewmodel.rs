//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `compute_viewmodel` and consumed by
//! the renderer. They carry display-ready data only: text already masked or
//! formatted, focus already resolved, highlight ranges already computed.
//!
//! The body of every screen is a flat list of [`BodyLine`]s, one per terminal row,
//! so windowing around the focused control is a slice operation.
//!
//! # Example
//!
//! ```rust
//! use worklink::ui::viewmodel::{BodyLine, ButtonRow, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "WorkLink PH".into(), subtitle: None, has_menu: false },
//!     lines: vec![BodyLine::Button(ButtonRow {
//!         label: "Log In".into(),
//!         is_focused: true,
//!         is_primary: true,
//!     })],
//!     sidebar: None,
//!     notice: None,
//!     footer: FooterInfo { keybindings: "Esc: hide".into() },
//! };
//! assert_eq!(vm.lines.len(), 1);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Body rows visible in the current window.
    pub lines: Vec<BodyLine>,

    /// Sidebar overlay, when open.
    pub sidebar: Option<SidebarInfo>,

    /// Advisory or acknowledgment shown above the footer.
    pub notice: Option<Notice>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text.
    pub title: String,
    /// Screen name shown next to the title.
    pub subtitle: Option<String>,
    /// Whether a menu hint is shown (screens composing the sidebar).
    pub has_menu: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// A single body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    Blank,
    /// Section heading.
    Heading(String),
    /// Plain text; dimmed for secondary copy.
    Text { text: String, dim: bool },
    /// Labelled text input.
    Field(FieldRow),
    /// Advisory under a field (format hints, mismatch notes).
    Hint(String),
    Button(ButtonRow),
    /// Checkbox or on/off switch.
    Toggle(ToggleRow),
    /// A row of selectable chips (tags or tabs).
    Chips(Vec<Chip>),
    /// Listing card title with matched substrings highlighted.
    CardTitle(CardTitle),
    /// Password strength meter.
    Meter(MeterRow),
    /// Wizard progress indicator.
    Progress { step: u8, total: u8 },
    /// No-match message of a filtered listing.
    Empty(EmptyState),
}

impl BodyLine {
    /// Whether this row holds the focused control.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        match self {
            Self::Field(field) => field.is_focused,
            Self::Button(button) => button.is_focused,
            Self::Toggle(toggle) => toggle.is_focused,
            Self::CardTitle(card) => card.is_focused,
            Self::Chips(chips) => chips.iter().any(|chip| chip.is_focused),
            _ => false,
        }
    }
}

/// Labelled single-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    pub label: String,
    /// Displayed value, masked for hidden passwords.
    pub value: String,
    /// Shown dimmed while the value is empty.
    pub placeholder: String,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonRow {
    pub label: String,
    pub is_focused: bool,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRow {
    pub label: String,
    pub checked: bool,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    pub is_active: bool,
    pub is_focused: bool,
}

/// Title row of a listing card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTitle {
    pub text: String,
    /// Character ranges to highlight, `(start, end)` with exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
    /// Action label shown at the end of the row ("View Details").
    pub action: String,
    pub is_focused: bool,
}

/// Password strength meter: `level` of four segments filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterRow {
    pub level: usize,
    pub label: String,
}

/// Empty state of a filtered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No jobs found matching your criteria.").
    pub message: String,
    /// Label of the action that clears the filters.
    pub action: String,
}

/// Sidebar overlay contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarInfo {
    pub items: Vec<SidebarEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub label: String,
    /// The entry for the screen being shown.
    pub is_current: bool,
    /// The entry under the keyboard cursor.
    pub is_highlighted: bool,
}

/// Transient message line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub tone: NoticeTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Warning,
}
