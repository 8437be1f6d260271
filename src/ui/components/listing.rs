//! Listing card renderer.
//!
//! Cards are several body rows; only the title row is special. It shows the
//! title with search matches highlighted and the card's action on the right.

use crate::ui::helpers::{self, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardTitle;

/// Renders a card title row and returns the next row.
///
/// ```text
///   Data Entry Specialist                          [View Details]
/// ```
///
/// The title is truncated so the action always fits. When the card is focused
/// the whole row takes the focus colours and match highlighting is dropped.
pub fn render_card_title(row: usize, card: &CardTitle, theme: &Theme, cols: usize) -> usize {
    let action = format!("[{}]", card.action);
    let title_room = cols.saturating_sub(width(&action) + 5);
    let title = truncate(&card.text, title_room);

    position_cursor(row, 1);
    if card.is_focused {
        print!("› ");
        print!("{}", Theme::fg(&theme.colors.focus_fg));
        print!("{}", Theme::bg(&theme.colors.focus_bg));
    } else {
        print!("  ");
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}", Theme::bold());

    helpers::render_highlighted_text(&title, &card.highlight_ranges, theme, card.is_focused);

    let used = 2 + width(&title);
    let gap = cols.saturating_sub(used + width(&action) + 1).max(1);
    print!("{}", " ".repeat(gap));
    if !card.is_focused {
        print!("{}", Theme::fg(&theme.colors.accent));
    }
    print!("{action}");
    print!("{}", Theme::reset());
    row + 1
}
