//! Domain layer for WorkLink.
//!
//! Core types with no dependency on Zellij or on rendering: screen identifiers,
//! listing records and their seed catalog, the profile draft, and the advisory
//! credential helpers used by the authentication forms.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`screen`]: Screen identifiers
//! - [`listing`]: Job and resource records
//! - [`catalog`]: Statically seeded records
//! - [`profile`]: Profile draft and typed field updates
//! - [`credentials`]: Password strength and field sanitizing

pub mod catalog;
pub mod credentials;
pub mod error;
pub mod listing;
pub mod profile;
pub mod screen;

pub use credentials::PasswordStrength;
pub use error::{Result, WorkLinkError};
pub use listing::{JobKind, JobListing, ResourceKind, ResourceListing};
pub use profile::{
    AccessibilityOption, Identity, JobPreference, NotificationChannel, ProfileDraft, ProfileText,
    ProfileUpdate,
};
pub use screen::ScreenId;
