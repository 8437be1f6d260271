//! Empty state component renderer.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the no-match message of a filtered listing on one row.
///
/// ```text
///        No jobs found matching your criteria.  (Clear Filters)
/// ```
///
/// The message uses `empty_state_fg`; the action label is dimmed since the
/// focusable "Clear Filters" button sits above the listing.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let action = format!("  ({})", empty.action);
    let message = truncate(&empty.message, cols.saturating_sub(width(&action)));
    let total = width(&message) + width(&action);
    let padding = (cols.saturating_sub(total)) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{message}");
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{action}");
    print!("{}", Theme::reset());
    row + 1
}
