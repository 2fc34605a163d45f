//! Path utilities for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is reachable under `/host`, which
//! maps to the directory Zellij was started from (usually the home directory).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Returns the titlefetch data directory,
/// `/host/.local/share/zellij/titlefetch`.
///
/// Only the trace export is written here.
///
/// # Examples
///
/// ```
/// use titlefetch::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with(".local/share/zellij/titlefetch"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("titlefetch")
}
