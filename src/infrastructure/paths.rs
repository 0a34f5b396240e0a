//! Storage location resolution.
//!
//! This module decides where Fluxline keeps its persisted state on the local
//! machine and names the individual files inside that directory.

use std::path::PathBuf;

/// File holding the serialized item list, a plain JSON array.
pub const DATA_FILE_NAME: &str = "fluxline-data.json";

/// File holding the persisted theme flag.
pub const THEME_FILE_NAME: &str = "fluxline-theme.json";

/// File the tracing subscriber appends formatted log lines to.
pub const LOG_FILE_NAME: &str = "fluxline.log";

/// Returns the default data directory for Fluxline storage.
///
/// Resolves to `fluxline` inside the platform data directory (for example
/// `~/.local/share/fluxline` on Linux). When the platform directory cannot be
/// determined, a `fluxline` directory relative to the working directory is
/// used instead.
///
/// # Examples
///
/// ```
/// use fluxline::infrastructure::default_data_dir;
///
/// let dir = default_data_dir();
/// assert!(dir.ends_with("fluxline"));
/// ```
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("fluxline"))
        .unwrap_or_else(|| PathBuf::from("./fluxline"))
}
