//! Composable UI component renderers.
//!
//! Each component draws one part of the pane at an explicit row and returns the
//! next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with the screen name and menu hint
//! - [`body`]: Form rows (fields, buttons, toggles, chips, meters)
//! - [`listing`]: Job and resource card titles with match highlighting
//! - [`empty`]: No-match message of a filtered listing
//! - [`sidebar`]: Navigation overlay
//! - [`footer`]: Notice line and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [blank line]
//! [Body rows]
//! [Notice, when present]
//! [Border]
//! [Footer]
//! ```
//!
//! The sidebar is drawn last, over the left edge of the body.

mod body;
mod empty;
mod footer;
mod header;
mod listing;
mod sidebar;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use body::render_body;
use footer::{render_footer, render_notice};
use header::render_header;
use sidebar::render_sidebar;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full pane layout.
///
/// The body is expected to be already windowed to fit between the chrome rows.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let body_top = current_row + 1;
    render_body(body_top, &vm.lines, theme, cols);

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    if let Some(notice) = &vm.notice {
        render_notice(border_row.saturating_sub(1), notice, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(sidebar) = &vm.sidebar {
        let height = border_row.saturating_sub(body_top);
        render_sidebar(body_top, height, sidebar, theme, cols);
    }
}
