// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory holding a `gallery.toml`.
    /// Takes precedence over the `[gallery] directory` setting.
    pub gallery_dir: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ART_SPACE_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
    /// Optional 0-based start position.
    /// Takes precedence over the `[gallery] start_index` setting.
    pub start: Option<usize>,
}
