// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The UI follows the Elm-style "state down, messages up" pattern: screens
//! expose `State`, `Message`, `update`, and `view`, and report to the
//! application through `Event` values.
//!
//! # Screens
//!
//! - [`gallery`] - Artwork frame, details card, and Previous/Next navigation
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod styles;
pub mod theming;
