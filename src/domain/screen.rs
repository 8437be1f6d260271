//! Screen identifiers.
//!
//! [`ScreenId`] names every screen the plugin can display. Exactly one screen is
//! current at any time and navigation between them is absolute: there is no
//! history stack.

use super::error::{Result, WorkLinkError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a displayable screen.
///
/// The string forms (`splash`, `login`, `signup`, `home`, `findjobs`, `profile`,
/// `resources`) are the identifiers accepted by [`ScreenId::from_str`] and by
/// [`ScreenId::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenId {
    /// Branding screen shown on startup; auto-advances to [`ScreenId::Login`].
    #[default]
    Splash,
    Login,
    #[serde(rename = "signup")]
    SignUp,
    /// Dashboard shown after authentication.
    Home,
    #[serde(rename = "findjobs")]
    FindJobs,
    Profile,
    Resources,
}

impl ScreenId {
    /// All screens, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Splash,
        Self::Login,
        Self::SignUp,
        Self::Home,
        Self::FindJobs,
        Self::Profile,
        Self::Resources,
    ];

    /// Returns the canonical identifier string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::Login => "login",
            Self::SignUp => "signup",
            Self::Home => "home",
            Self::FindJobs => "findjobs",
            Self::Profile => "profile",
            Self::Resources => "resources",
        }
    }

    /// Resolves a raw identifier, falling back to [`ScreenId::Splash`].
    ///
    /// Unrecognized identifiers are not an error for navigation purposes: the
    /// parse failure is logged at warn level and the splash screen is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use worklink::domain::ScreenId;
    ///
    /// assert_eq!(ScreenId::resolve("findjobs"), ScreenId::FindJobs);
    /// assert_eq!(ScreenId::resolve("bogus"), ScreenId::Splash);
    /// ```
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e: WorkLinkError| {
            tracing::warn!(error = %e, "unrecognized screen id, falling back to splash");
            Self::Splash
        })
    }

    /// Whether this screen composes the sidebar overlay.
    #[must_use]
    pub const fn has_sidebar(self) -> bool {
        matches!(
            self,
            Self::Home | Self::FindJobs | Self::Resources | Self::Profile
        )
    }
}

impl FromStr for ScreenId {
    type Err = WorkLinkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| WorkLinkError::UnknownScreen(s.to_string()))
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
