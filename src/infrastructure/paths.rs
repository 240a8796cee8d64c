//! Path utilities for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Returns the plugin's data directory (holds the trace file).
///
/// `/host` points to the cwd of the last focused terminal, which is usually
/// the user's home, so this is typically `~/.local/share/zellij/hnsearch`.
///
/// ```
/// use hnsearch::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/hnsearch"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("hnsearch")
}

/// Maps `~` and `~/...` to their `/host` equivalents; other paths are unchanged.
///
/// ```
/// use hnsearch::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
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
