// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Artwork shown when the gallery opens (0-based).
pub const DEFAULT_START_INDEX: usize = 0;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width; portrait like the phone screen the layout targets.
pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;

/// Default window height.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

const _: () = {
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
