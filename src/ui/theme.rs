//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Three are compiled in; a custom one can be loaded
//! from disk through the `theme_file` plugin option.
//!
//! # Built-in Themes
//!
//! - `worklink`: Dark navy theme with the brand blue (default)
//! - `worklink-light`: Light variant for bright terminals
//! - `high-contrast`: Black and white with saturated accents, for low vision
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e8f0fe"
//! header_bg = "#1a3d7c"      # optional
//! text_normal = "#dce3ee"
//! text_dim = "#7d8aa0"
//! border = "#33415c"
//! accent = "#5b9bff"
//! focus_fg = "#0b1526"
//! focus_bg = "#ffd166"
//! primary_fg = "#ffffff"
//! primary_bg = "#2563eb"
//! match_highlight_fg = "#0b1526"
//! match_highlight_bg = "#ffd166"
//! chip_active_fg = "#ffffff"
//! chip_active_bg = "#2563eb"
//! empty_state_fg = "#5b9bff"
//! success_fg = "#34d399"
//! warning_fg = "#fbbf24"
//! meter = ["#ef4444", "#f97316", "#eab308", "#22c55e"]
//! sidebar_bg = "#111c30"     # optional
//! ```
//!
//! # Example
//!
//! ```rust
//! use worklink::ui::theme::Theme;
//!
//! let theme = Theme::from_name("high-contrast").unwrap();
//! print!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert_eq!(theme.name, "high-contrast");
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{Result, WorkLinkError};

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 3] = ["worklink", "worklink-light", "high-contrast"];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions, as hex strings (e.g. `"#2563eb"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Secondary copy, placeholders, footer.
    pub text_dim: String,
    pub border: String,

    /// Headings and links.
    pub accent: String,

    /// The focused control.
    pub focus_fg: String,
    pub focus_bg: String,

    /// Primary buttons ("Log In", "Save Profile").
    pub primary_fg: String,
    pub primary_bg: String,

    /// Search match highlight inside card titles.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Selected tag chip or resource tab.
    pub chip_active_fg: String,
    pub chip_active_bg: String,

    pub empty_state_fg: String,
    pub success_fg: String,
    pub warning_fg: String,

    /// Strength meter colours, weakest first.
    pub meter: [String; 4],

    #[serde(default)]
    pub sidebar_bg: Option<String>,
}

impl Theme {
    /// Loads a built-in theme by name. `None` for names not in [`BUILTIN_THEMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "worklink" => include_str!("../../themes/worklink.toml"),
            "worklink-light" => include_str!("../../themes/worklink-light.toml"),
            "high-contrast" => include_str!("../../themes/high-contrast.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`WorkLinkError::Theme`] if the file cannot be read or does not
    /// parse as a theme.
    ///
    /// ```rust,no_run
    /// use worklink::ui::theme::Theme;
    ///
    /// let theme = Theme::from_file("/path/to/theme.toml")?;
    /// # Ok::<(), worklink::WorkLinkError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            WorkLinkError::Theme(format!("Failed to read theme file {}: {e}", path.display()))
        })?;

        toml::from_str(&contents)
            .map_err(|e| WorkLinkError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Colour for a strength meter filled to `level` of four segments.
    #[must_use]
    pub fn meter_color(&self, level: usize) -> &str {
        let index = level.clamp(1, self.colors.meter.len()) - 1;
        &self.colors.meter[index]
    }

    /// Converts a hex color to RGB, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground sequence for a hex colour.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background sequence for a hex colour.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `worklink` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("worklink").expect("Built-in worklink theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("neon").is_none());
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#zz"), "\u{001b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#2563eb"), "\u{001b}[48;2;37;99;235m");
    }

    #[test]
    fn meter_color_clamps_level() {
        let theme = Theme::default();
        assert_eq!(theme.meter_color(0), theme.colors.meter[0]);
        assert_eq!(theme.meter_color(4), theme.colors.meter[3]);
        assert_eq!(theme.meter_color(9), theme.colors.meter[3]);
    }
}
