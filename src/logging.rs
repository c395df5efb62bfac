// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Log output goes to stderr. The filter comes from `RUST_LOG` and defaults
//! to `info`, e.g. `RUST_LOG=art_space=debug` to follow navigation.

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Call once, before the window opens.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}
