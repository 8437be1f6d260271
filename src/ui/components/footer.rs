//! Footer and notice renderers.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, Notice, NoticeTone};

/// Prints `text` centered across `cols`, truncating it when too wide.
fn print_centered(text: &str, cols: usize) {
    let text = truncate(text, cols);
    let text_len = width(&text);
    let padding = (cols.saturating_sub(text_len)) / 2;
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
}

/// Renders the keybinding hints at `row`, dimmed and centered.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&footer.keybindings, cols);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a notice line: a save acknowledgment or a form advisory.
pub fn render_notice(row: usize, notice: &Notice, theme: &Theme, cols: usize) -> usize {
    let (color, marker) = match notice.tone {
        NoticeTone::Success => (&theme.colors.success_fg, "✓"),
        NoticeTone::Warning => (&theme.colors.warning_fg, "!"),
    };

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(color));
    print_centered(&format!("{marker} {}", notice.message), cols);
    print!("{}", Theme::reset());
    row + 1
}
