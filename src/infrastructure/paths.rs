//! Filesystem path resolution for persisted data.
//!
//! This module locates the data directory holding the persisted preference
//! snapshot. Resolution follows the XDG convention with a home-directory
//! fallback, and degrades to the working directory when neither environment
//! variable is available.

use std::path::PathBuf;

/// Application directory name under the data root.
const APP_DIR: &str = "astrafind";

/// Returns the default data directory for AstraFind.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/astrafind`
/// 2. `$HOME/.local/share/astrafind`
/// 3. `./astrafind` when neither variable is set
///
/// # Examples
///
/// ```
/// use astrafind::infrastructure::default_data_dir;
///
/// let dir = default_data_dir();
/// assert!(dir.ends_with("astrafind"));
/// ```
#[must_use]
pub fn default_data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join(APP_DIR);
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
        }
    }

    PathBuf::from(".").join(APP_DIR)
}

/// Returns the full path of the persisted snapshot within a data directory.
#[must_use]
pub fn state_file_path(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join(crate::storage::STATE_FILE_NAME)
}
