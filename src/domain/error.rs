//! Error types for the WorkLink plugin.
//!
//! This module defines the centralized error type [`WorkLinkError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.
//!
//! Almost every user action in WorkLink succeeds unconditionally. The variants below
//! cover the few places where input arrives as a raw identifier (screen ids, resource
//! tab ids) plus the ambient failures of theme loading and configuration.

use thiserror::Error;

/// The main error type for WorkLink operations.
///
/// # Examples
///
/// ```
/// use worklink::domain::WorkLinkError;
///
/// let err = WorkLinkError::UnknownScreen("bogus".to_string());
/// assert_eq!(err.to_string(), "Unknown screen: bogus");
/// ```
#[derive(Debug, Error)]
pub enum WorkLinkError {
    /// A raw screen identifier did not name any known screen.
    ///
    /// Navigation recovers from this by falling back to the splash screen; the
    /// error exists so callers that parse identifiers can see what went wrong.
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    /// A resource tab identifier did not name any resource type.
    #[error("Unknown resource category: {0}")]
    UnknownCategory(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for WorkLink operations.
pub type Result<T> = std::result::Result<T, WorkLinkError>;
