//! Sandbox path resolution.
//!
//! Zellij mounts the host home directory at `/host` inside the plugin
//! sandbox, so user-supplied paths (catalog, theme, data directory) are
//! rewritten onto that mount.

use std::path::PathBuf;

/// Sandbox view of the host home directory.
pub const HOST_ROOT: &str = "/host";

/// Default directory for the span journal.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/storefront")
}

/// Resolves the data directory, honouring a configured override.
#[must_use]
pub fn data_dir(configured: Option<&str>) -> PathBuf {
    configured
        .map(|dir| PathBuf::from(expand_tilde(dir)))
        .unwrap_or_else(default_data_dir)
}

/// Rewrites a leading `~` onto the host mount.
///
/// # Examples
///
/// ```
/// use storefront::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/shop/catalog.toml"), "/host/shop/catalog.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/catalog.toml"), "/etc/catalog.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}
