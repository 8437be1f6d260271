//! Job and resource listing records.
//!
//! Both record kinds are immutable once seeded. They are owned by a listing
//! controller for the lifetime of the screen that displays them.

use super::error::{Result, WorkLinkError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Work arrangement of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Remote,
    Office,
    Field,
}

impl JobKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Office => "office",
            Self::Field => "field",
        }
    }
}

/// A job posting shown on the Find Jobs screen.
///
/// `tags` keeps the display order of the original posting; matching treats it
/// as a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Human-readable age of the posting, e.g. `"2 days ago"`.
    pub posted_label: String,
    pub tags: Vec<String>,
    pub description: String,
    pub kind: JobKind,
}

impl JobListing {
    /// Whether the posting carries `tag` (exact, case-sensitive).
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Type of a resource entry. The string form doubles as the resource tab id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Legal,
    Training,
    Entrepreneurship,
    Employment,
    Accessibility,
}

impl ResourceKind {
    pub const ALL: [Self; 5] = [
        Self::Legal,
        Self::Training,
        Self::Entrepreneurship,
        Self::Employment,
        Self::Accessibility,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legal => "legal",
            Self::Training => "training",
            Self::Entrepreneurship => "entrepreneurship",
            Self::Employment => "employment",
            Self::Accessibility => "accessibility",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = WorkLinkError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| WorkLinkError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry in the employment resources directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceListing {
    pub id: u32,
    pub title: String,
    pub organization: String,
    /// Display label of the category, e.g. `"Legal Resources"`.
    pub category: String,
    pub description: String,
    pub kind: ResourceKind,
}
