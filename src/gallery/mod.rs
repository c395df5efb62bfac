// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: artwork records, the navigation controller, and the
//! providers that build a gallery from bundled or user-supplied assets.
//!
//! # Modules
//!
//! - [`artwork`]: [`ArtworkRecord`] and the immutable [`GallerySet`]
//! - [`controller`]: [`GalleryController`], the bounded cursor and its read model
//! - [`provider`]: [`GalleryProvider`] implementations
//! - [`manifest`]: the `gallery.toml` format
//! - [`decode`]: SVG and raster decoding into image handles

pub mod artwork;
pub mod controller;
pub mod decode;
pub mod manifest;
pub mod provider;

pub use artwork::{ArtworkRecord, GallerySet};
pub use controller::{Direction, GalleryController, GalleryView};
pub use provider::{load_gallery, BundledGallery, DirectoryGallery, GalleryProvider};
