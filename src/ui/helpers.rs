//! Shared rendering utilities.
//!
//! Low-level pieces used by several components: cursor positioning, width-safe
//! truncation and search match highlighting. All widths are counted in
//! characters, never bytes, since catalog copy contains `·` and `•`.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Character count of `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, ending in `…` when shortened.
///
/// ```rust
/// use worklink::ui::helpers::truncate;
///
/// assert_eq!(truncate("Makati City", 20), "Makati City");
/// assert_eq!(truncate("Makati City", 6), "Makat…");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Prints `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices with an exclusive end. On a
/// focused row the focus colours win and nothing is highlighted. Ranges past
/// the end of `text` are clipped, which happens when the title was truncated.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_focused: bool,
) {
    if ranges.is_empty() || is_focused {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Posted · 2 days ago", 8), "Posted …");
        assert_eq!(truncate("••••", 4), "••••");
        assert_eq!(truncate("abc", 0), "");
    }
}
