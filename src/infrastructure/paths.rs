//! Path utilities for the Zellij sandbox environment.
//!
//! This module provides path handling for the plugin sandbox, where the host
//! filesystem is mounted under `/host`. The preference file and trace output
//! both live in the plugin data directory returned by [`get_data_dir`].

use std::path::PathBuf;

/// Returns the data directory for zrecipe storage.
///
/// The directory is located at `/host/.local/share/zellij/zrecipe` in the
/// Zellij sandbox. `/host` points to the cwd of the last focused terminal, or
/// the folder where Zellij was started. This is typically the user's home
/// directory, making the effective path `~/.local/share/zellij/zrecipe`.
///
/// Holds `prefs.json` (favorites and theme) and the optional trace output file.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zrecipe")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// In the sandbox, the host's home directory (`~`) maps to `/host`. Used for
/// user-supplied theme file paths in the plugin configuration.
///
/// # Examples
///
/// ```
/// use zrecipe::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::expand_tilde;

    #[test]
    fn tilde_expansion() {
        assert_eq!(expand_tilde("~/x"), "/host/x");
        assert_eq!(expand_tilde("relative/x"), "relative/x");
    }
}
