//! Default values for descriptor-registry configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// File name of the manifest inside a data directory.
pub const DEFAULT_MANIFEST_FILENAME: &str = "manifest.json";

/// Environment variable overriding the bundled data directory.
pub const DATA_DIR_ENV: &str = "DESCRIPTOR_DATA_DIR";

/// Returns the default descriptor data directory.
///
/// Uses the platform-appropriate data directory:
/// - Linux: `~/.local/share/descriptor-registry` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/descriptor-registry`
/// - Windows: `{FOLDERID_RoamingAppData}\descriptor-registry`
///
/// Falls back to `descriptor-data` in the current directory if the platform
/// data directory cannot be determined.
///
/// This can be overridden by the `--data-dir` CLI flag or the
/// `DESCRIPTOR_DATA_DIR` environment variable.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("descriptor-registry"))
        .unwrap_or_else(|| PathBuf::from("descriptor-data"))
}

/// The manifest path inside a data directory.
pub fn default_manifest_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DEFAULT_MANIFEST_FILENAME)
}
