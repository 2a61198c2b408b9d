//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Store file name inside the data directory.
const STORE_FILE_NAME: &str = "store.json";

/// Returns the data directory, `/host/.local/share/zellij/zemoji`.
///
/// `/host` is the cwd of the last focused terminal, or the folder Zellij was
/// started in, which is typically the user's home directory.
///
/// # Examples
///
/// ```
/// use zemoji::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zemoji"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zemoji")
}

/// Returns the durable store path, `store.json` in the data directory.
#[must_use]
pub fn get_store_path() -> PathBuf {
    get_data_dir().join(STORE_FILE_NAME)
}

/// Maps `~` paths onto the `/host` mount.
///
/// # Examples
///
/// ```
/// use zemoji::infrastructure::expand_tilde;
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
