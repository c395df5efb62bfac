// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a small art gallery browser built with the Iced GUI
//! framework.
//!
//! It shows one artwork at a time with its title, artist, and year, and
//! moves through a fixed collection with Previous/Next. The collection is
//! either bundled with the binary or read from a directory holding a
//! `gallery.toml` manifest.

#![doc(html_root_url = "https://docs.rs/art_space/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod ui;
