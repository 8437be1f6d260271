//! WorkLink PH: an inclusive job-matching interface as a Zellij plugin.
//!
//! WorkLink connects persons with disabilities, senior citizens, youth and
//! marginalized groups with employment opportunities. The plugin provides:
//! - A splash screen that hands over to login after one second
//! - Login and a two-step sign-up wizard with advisory validation
//! - A dashboard, a searchable job board with tag filters, and a resource
//!   directory with category tabs
//! - A profile editor with job, accessibility and notification preferences
//! - A sidebar overlay for moving between the logged-in screens
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys and timers in
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, compound transitions             │
//! │  - Screen lifecycle and splash scheduler            │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐          ┌───────────────────────┐
//! │ Filter Layer          │          │ UI Layer (ui/)        │
//! │ (filter/)             │          │ - Components          │
//! │ - Text predicates     │          │ - Theming             │
//! │ - Tag / tab selection │          │                       │
//! └───────────────────────┘          └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Screens, listings, catalog, profile, credentials │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/worklink.wasm" {
//!         theme "high-contrast"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use worklink::{handle_event, initialize, Config, Event};
//! use worklink::domain::ScreenId;
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::Navigate(ScreenId::Login))?;
//! handle_event(&mut state, &Event::Login)?;
//! assert!(state.is_logged_in());
//! assert_eq!(state.current_screen(), ScreenId::Home);
//! # Ok::<(), worklink::WorkLinkError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, TimerId};
pub use domain::{Result, ScreenId, WorkLinkError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Levels accepted by the `trace_level` option.
const TRACE_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Plugin configuration parsed from the KDL plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/worklink.wasm" {
///     theme "worklink-light"
///     theme_file "~/.config/worklink/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme, already tilde-expanded. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// One of `trace`, `debug`, `info`, `warn`, `error`. Default: `info`.
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses the configuration map Zellij passes to `load`.
    ///
    /// Blank values are treated as unset and an unrecognised `trace_level` is
    /// dropped, so a bad option never stops the plugin from loading.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use worklink::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme_file".to_string(), "~/calm.toml".to_string());
    /// map.insert("trace_level".to_string(), "verbose".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/calm.toml"));
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        Self {
            theme_name: value("theme").map(String::from),
            theme_file: value("theme_file").map(infrastructure::expand_tilde),
            trace_level: value("trace_level").and_then(|raw| parse_trace_level(raw).ok()),
        }
    }

    /// Resolves the theme: file first, then built-in name, then the default.
    ///
    /// Failures are logged and fall back to [`Theme::default`].
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(path) = &self.theme_file {
            match Theme::from_file(path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                }
            }
        } else if let Some(name) = &self.theme_name {
            match Theme::from_name(name) {
                Some(theme) => return theme,
                None => tracing::debug!(theme_name = %name, "unknown theme, using default"),
            }
        }
        Theme::default()
    }
}

/// Normalises a `trace_level` value.
///
/// # Errors
///
/// Returns [`WorkLinkError::Config`] for anything but the five tracing levels.
///
/// ```rust
/// use worklink::parse_trace_level;
///
/// assert_eq!(parse_trace_level("DEBUG").unwrap(), "debug");
/// assert!(parse_trace_level("loud").is_err());
/// ```
pub fn parse_trace_level(raw: &str) -> Result<String> {
    let level = raw.trim().to_ascii_lowercase();
    if TRACE_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(WorkLinkError::Config(format!(
            "trace_level must be one of {}, got '{raw}'",
            TRACE_LEVELS.join(", ")
        )))
    }
}

/// Builds the initial state: splash screen, logged out, configured theme.
///
/// The splash transition is armed later by [`Event::Start`], once the host is
/// subscribed to timer events.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(config = ?config, "initializing worklink plugin");
    AppState::new(config.theme())
}
