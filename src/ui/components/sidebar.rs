//! Sidebar overlay renderer.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SidebarInfo;

const SIDEBAR_WIDTH: usize = 24;

/// Draws the navigation overlay over the left edge of the body.
///
/// ```text
/// ┌ Menu ────────────────┐
/// │ › Home               │
/// │ • Find Jobs          │
/// │   Resources          │
/// │   Profile            │
/// └──────────────────────┘
/// ```
///
/// `›` marks the cursor, `•` the screen being shown. Rows beyond `height` are
/// not drawn.
pub fn render_sidebar(row: usize, height: usize, sidebar: &SidebarInfo, theme: &Theme, cols: usize) {
    let box_width = SIDEBAR_WIDTH.min(cols);
    let inner = box_width.saturating_sub(2);
    let needed = sidebar.items.len() + 2;
    if height < needed || inner < 4 {
        return;
    }

    let open_background = || {
        if let Some(bg) = &theme.colors.sidebar_bg {
            print!("{}", Theme::bg(bg));
        }
    };

    position_cursor(row, 1);
    open_background();
    print!("{}", Theme::fg(&theme.colors.border));
    let title = " Menu ";
    print!("┌{}", title);
    print!("{}┐", "─".repeat(inner.saturating_sub(width(title))));
    print!("{}", Theme::reset());

    for (offset, item) in sidebar.items.iter().enumerate() {
        position_cursor(row + 1 + offset, 1);
        open_background();
        print!("{}│", Theme::fg(&theme.colors.border));

        let marker = if item.is_highlighted {
            "›"
        } else if item.is_current {
            "•"
        } else {
            " "
        };
        let label = format!(" {marker} {}", item.label);
        if item.is_highlighted {
            print!("{}", Theme::fg(&theme.colors.focus_fg));
            print!("{}", Theme::bg(&theme.colors.focus_bg));
        } else if item.is_current {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{label}");
        print!("{}", " ".repeat(inner.saturating_sub(width(&label))));
        print!("{}", Theme::reset());
        open_background();
        print!("{}│", Theme::fg(&theme.colors.border));
        print!("{}", Theme::reset());
    }

    position_cursor(row + 1 + sidebar.items.len(), 1);
    open_background();
    print!("{}", Theme::fg(&theme.colors.border));
    print!("└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}
