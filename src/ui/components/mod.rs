// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_display`] - Error panel with a localized title, message, and
//!   technical details

pub mod error_display;
