//! Body row renderers.
//!
//! One [`BodyLine`] is one terminal row. Focused controls are drawn in the
//! theme's focus colours and prefixed with `›` so focus stays visible on
//! terminals without truecolor.

use super::empty::render_empty_state;
use super::listing::render_card_title;
use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyLine, ButtonRow, Chip, FieldRow, MeterRow, ToggleRow};

/// Left indent of body rows.
const INDENT: usize = 2;

const FOCUS_MARKER: &str = "›";

/// Renders body rows from `row` downwards and returns the next free row.
pub fn render_body(row: usize, lines: &[BodyLine], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for line in lines {
        current_row = render_line(current_row, line, theme, cols);
    }
    current_row
}

fn render_line(row: usize, line: &BodyLine, theme: &Theme, cols: usize) -> usize {
    if let BodyLine::CardTitle(card) = line {
        return render_card_title(row, card, theme, cols);
    }
    if let BodyLine::Empty(empty) = line {
        return render_empty_state(row, empty, theme, cols);
    }

    position_cursor(row, 1);
    let room = cols.saturating_sub(INDENT + 2);
    match line {
        BodyLine::Blank => {}
        BodyLine::Heading(text) => {
            print_indent(false);
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
            print!("{}", truncate(text, room));
        }
        BodyLine::Text { text, dim } => {
            print_indent(false);
            if *dim {
                print!("{}", Theme::fg(&theme.colors.text_dim));
            } else {
                print!("{}", Theme::fg(&theme.colors.text_normal));
            }
            print!("{}", truncate(text, room));
        }
        BodyLine::Hint(text) => {
            print_indent(false);
            print!("{}", Theme::fg(&theme.colors.warning_fg));
            print!("{}", truncate(&format!("↳ {text}"), room));
        }
        BodyLine::Field(field) => render_field(field, theme, room),
        BodyLine::Button(button) => render_button(button, theme, room),
        BodyLine::Toggle(toggle) => render_toggle(toggle, theme, room),
        BodyLine::Chips(chips) => render_chips(chips, theme),
        BodyLine::Meter(meter) => render_meter(meter, theme),
        BodyLine::Progress { step, total } => {
            print_indent(false);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("Step {step} of {total}  ");
            print!("{}", Theme::fg(&theme.colors.accent));
            for i in 1..=*total {
                print!("{}", if i <= *step { "●" } else { "○" });
            }
        }
        BodyLine::CardTitle(_) | BodyLine::Empty(_) => {}
    }
    print!("{}", Theme::reset());
    row + 1
}

fn print_indent(is_focused: bool) {
    if is_focused {
        print!("{FOCUS_MARKER} ");
    } else {
        print!("{}", " ".repeat(INDENT));
    }
}

fn print_focus(theme: &Theme) {
    print!("{}", Theme::fg(&theme.colors.focus_fg));
    print!("{}", Theme::bg(&theme.colors.focus_bg));
}

/// `Label: value▏` with the value (or placeholder) in an input span.
fn render_field(field: &FieldRow, theme: &Theme, room: usize) {
    print_indent(field.is_focused);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    let label = format!("{}: ", field.label);
    print!("{label}");

    let available = room.saturating_sub(width(&label) + 1);
    if field.is_focused {
        print_focus(theme);
    }
    if field.value.is_empty() {
        if !field.is_focused {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{}", truncate(&field.placeholder, available));
    } else {
        let value = &field.value;
        let shown = if width(value) > available {
            // Keep the end of the value visible while typing.
            value
                .chars()
                .skip(width(value) - available)
                .collect::<String>()
        } else {
            value.clone()
        };
        print!("{shown}");
    }
    if field.is_focused {
        print!("▏");
    }
}

fn render_button(button: &ButtonRow, theme: &Theme, room: usize) {
    print_indent(button.is_focused);
    if button.is_focused {
        print!("{}", Theme::bold());
        print_focus(theme);
    } else if button.is_primary {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.primary_fg));
        print!("{}", Theme::bg(&theme.colors.primary_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.accent));
    }
    print!("{}", truncate(&format!("[ {} ]", button.label), room));
}

fn render_toggle(toggle: &ToggleRow, theme: &Theme, room: usize) {
    print_indent(toggle.is_focused);
    if toggle.is_focused {
        print_focus(theme);
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    let mark = if toggle.checked { "[x]" } else { "[ ]" };
    print!("{}", truncate(&format!("{mark} {}", toggle.label), room));
}

fn render_chips(chips: &[Chip], theme: &Theme) {
    let any_focused = chips.iter().any(|chip| chip.is_focused);
    print_indent(any_focused);
    for chip in chips {
        if chip.is_focused {
            print!("{}", Theme::underline());
            print_focus(theme);
        } else if chip.is_active {
            print!("{}", Theme::fg(&theme.colors.chip_active_fg));
            print!("{}", Theme::bg(&theme.colors.chip_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        let mark = if chip.is_active { "✓" } else { " " };
        print!("[{mark}{}]", chip.label);
        print!("{} ", Theme::reset());
    }
}

fn render_meter(meter: &MeterRow, theme: &Theme) {
    print_indent(false);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("Strength: ");
    print!("{}", Theme::fg(theme.meter_color(meter.level)));
    for segment in 1..=4 {
        print!("{}", if segment <= meter.level { "██" } else { "░░" });
    }
    print!(" {}", meter.label);
}
