// SPDX-License-Identifier: MPL-2.0
//! Gallery providers: where the artworks of a session come from.
//!
//! A provider reads a [`Manifest`] and the image files it names, decodes
//! them, and hands back an immutable [`GallerySet`]. The application uses
//! [`BundledGallery`] by default and [`DirectoryGallery`] when the user
//! points it at a folder.

use super::artwork::{ArtworkRecord, GallerySet};
use super::decode::decode_artwork;
use super::manifest::{Manifest, MANIFEST_FILE};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
struct BundledAssets;

/// Source of the artworks displayed for a session.
pub trait GalleryProvider {
    /// Loads every artwork named by the provider's manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest or any artwork cannot be read or
    /// decoded. An empty manifest is not an error here.
    fn load(&self) -> Result<GallerySet>;
}

/// Artworks embedded in the executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledGallery;

impl GalleryProvider for BundledGallery {
    fn load(&self) -> Result<GallerySet> {
        let manifest = BundledAssets::get(MANIFEST_FILE)
            .ok_or_else(|| Error::Manifest(format!("bundled {MANIFEST_FILE} is missing")))?;
        let manifest = Manifest::from_bytes(manifest.data.as_ref())?;

        build_gallery(&manifest, |name| {
            BundledAssets::get(name)
                .map(|file| file.data.into_owned())
                .ok_or_else(|| Error::Io(format!("bundled artwork not found: {name}")))
        })
    }
}

/// Artworks read from a directory containing a `gallery.toml`.
#[derive(Debug, Clone)]
pub struct DirectoryGallery {
    root: PathBuf,
}

impl DirectoryGallery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl GalleryProvider for DirectoryGallery {
    fn load(&self) -> Result<GallerySet> {
        let content = fs::read(self.root.join(MANIFEST_FILE))?;
        let manifest = Manifest::from_bytes(&content)?;

        build_gallery(&manifest, |name| {
            let path = self.root.join(name);
            fs::read(&path).map_err(|e| Error::Io(format!("{}: {e}", path.display())))
        })
    }
}

/// Decodes each manifest entry in order using `read` to fetch image bytes.
fn build_gallery<F>(manifest: &Manifest, mut read: F) -> Result<GallerySet>
where
    F: FnMut(&str) -> Result<Vec<u8>>,
{
    manifest
        .artworks
        .iter()
        .map(|entry| {
            let bytes = read(&entry.image)?;
            let decoded = decode_artwork(&entry.image, &bytes)?;
            tracing::debug!(
                image = %entry.image,
                width = decoded.width,
                height = decoded.height,
                "decoded artwork"
            );
            Ok(ArtworkRecord::new(
                entry.title.as_str(),
                entry.artist.as_str(),
                entry.year.as_str(),
                decoded.handle,
            ))
        })
        .collect::<Result<Vec<_>>>()
        .map(GallerySet::new)
}

/// Loads the gallery from `directory` when given, otherwise from the bundle.
///
/// # Errors
///
/// Propagates the provider's error.
pub fn load_gallery(directory: Option<&Path>) -> Result<GallerySet> {
    let gallery = match directory {
        Some(dir) => {
            tracing::info!(directory = %dir.display(), "loading gallery from directory");
            DirectoryGallery::new(dir).load()?
        }
        None => BundledGallery.load()?,
    };
    tracing::info!(artworks = gallery.len(), "gallery loaded");
    Ok(gallery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="4">
        <rect width="8" height="4" fill="green" />
    </svg>"#;

    fn write_manifest(dir: &Path, content: &str) {
        fs::write(dir.join(MANIFEST_FILE), content).expect("failed to write manifest");
    }

    #[test]
    fn bundled_gallery_has_four_artworks() {
        let gallery = BundledGallery.load().expect("bundled gallery should load");
        assert_eq!(gallery.len(), 4);
        for record in &gallery {
            assert!(!record.title().is_empty());
            assert!(!record.artist_name().is_empty());
            assert!(!record.year().is_empty());
        }
    }

    #[test]
    fn directory_gallery_loads_png_and_svg() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        RgbaImage::from_pixel(3, 3, Rgba([0, 0, 255, 255]))
            .save(temp_dir.path().join("blue.png"))
            .expect("failed to write png");
        fs::write(temp_dir.path().join("green.svg"), SVG).expect("failed to write svg");
        write_manifest(
            temp_dir.path(),
            r#"
            [[artwork]]
            title = "Blue"
            artist = "Painter"
            year = "2001"
            image = "blue.png"

            [[artwork]]
            title = "Green"
            artist = "Painter"
            year = "2002"
            image = "green.svg"
            "#,
        );

        let gallery = DirectoryGallery::new(temp_dir.path())
            .load()
            .expect("directory gallery should load");
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery[0].title(), "Blue");
        assert_eq!(gallery[1].year(), "2002");
    }

    #[test]
    fn empty_manifest_yields_empty_gallery() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_manifest(temp_dir.path(), "");

        let gallery = DirectoryGallery::new(temp_dir.path())
            .load()
            .expect("empty manifest should load");
        assert!(gallery.is_empty());
    }

    #[test]
    fn missing_manifest_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = DirectoryGallery::new(temp_dir.path()).load();
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn manifest_with_invalid_utf8_is_rejected() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(MANIFEST_FILE), b"title = \"\xff\"\n")
            .expect("failed to write manifest");

        match DirectoryGallery::new(dir.path()).load() {
            Err(Error::Manifest(_)) => {}
            other => panic!("expected Manifest error, got {:?}", other.map(|g| g.len())),
        }
    }

    #[test]
    fn missing_artwork_file_names_the_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_manifest(
            temp_dir.path(),
            r#"
            [[artwork]]
            title = "Gone"
            artist = "Nobody"
            year = "1999"
            image = "gone.png"
            "#,
        );

        match DirectoryGallery::new(temp_dir.path()).load() {
            Err(Error::Io(message)) => assert!(message.contains("gone.png")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn broken_artwork_fails_the_whole_gallery() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("bad.png"), b"garbage").expect("failed to write");
        write_manifest(
            temp_dir.path(),
            r#"
            [[artwork]]
            title = "Bad"
            artist = "Nobody"
            year = "1999"
            image = "bad.png"
            "#,
        );

        let result = DirectoryGallery::new(temp_dir.path()).load();
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[test]
    fn load_gallery_prefers_directory_when_given() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_manifest(temp_dir.path(), "");

        let from_dir = load_gallery(Some(temp_dir.path())).expect("directory should load");
        assert!(from_dir.is_empty());

        let bundled = load_gallery(None).expect("bundle should load");
        assert_eq!(bundled.len(), 4);
    }
}
