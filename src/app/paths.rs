// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions
//!    (the `--config-dir` CLI argument, or a test directory)
//! 2. **Environment variable** (`ART_SPACE_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "ArtSpace";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ART_SPACE_CONFIG_DIR";

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// - Linux: `~/.config/ArtSpace/`
/// - macOS: `~/Library/Application Support/ArtSpace/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ArtSpace\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// The override has the highest priority, then `ART_SPACE_CONFIG_DIR` (if
/// set and non-empty), then the platform config directory with the app name
/// appended.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
