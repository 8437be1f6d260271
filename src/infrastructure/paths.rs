//! Paths inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host directory the session was started from (normally the
//! user's home) at `/host`, so `~` in user-supplied paths maps there.

use std::path::PathBuf;

/// File name of the OTLP trace export inside the data directory.
pub const TRACE_FILE_NAME: &str = "worklink-otlp.json";

/// Plugin data directory, `/host/.local/share/zellij/worklink`.
///
/// ```
/// use worklink::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/worklink"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("worklink")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use worklink::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/calm.toml"), "/host/themes/calm.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/worklink.toml"), "/etc/worklink.toml");
/// assert_eq!(expand_tilde("~user/x"), "~user/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
