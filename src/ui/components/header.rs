//! Header component renderer.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

const MENU_HINT: &str = " ☰ Ctrl+b";

/// Renders the title bar at `row` and returns the next row.
///
/// The title and screen name are centered. Screens with a sidebar get a menu
/// hint on the left edge.
///
/// ```text
/// ☰ Ctrl+b              WorkLink PH · Find Jobs
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = match &header.subtitle {
        Some(subtitle) => format!("{} · {subtitle}", header.title),
        None => header.title.clone(),
    };
    let title_len = width(&title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    let hint_len = if header.has_menu && width(MENU_HINT) < padding {
        print!("{MENU_HINT}");
        width(MENU_HINT)
    } else {
        0
    };

    print!("{}", " ".repeat(padding - hint_len));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
