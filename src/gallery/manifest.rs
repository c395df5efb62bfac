// SPDX-License-Identifier: MPL-2.0
//! `gallery.toml` manifest describing the artworks of a gallery.
//!
//! ```toml
//! [[artwork]]
//! title = "The Starry Night"
//! artist = "Vincent van Gogh"
//! year = "1889"
//! image = "starry_night.svg"
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;

/// File name of the manifest inside a gallery directory or bundle.
pub const MANIFEST_FILE: &str = "gallery.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Manifest {
    /// Artworks in display order.
    #[serde(default, rename = "artwork")]
    pub artworks: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ManifestEntry {
    pub title: String,
    pub artist: String,
    /// Kept as text: dates such as "c. 1665" are common.
    pub year: String,
    /// Image file name, relative to the manifest.
    pub image: String,
}

impl Manifest {
    /// Parses a manifest from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] if the TOML is invalid or an entry is
    /// missing a field.
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::Manifest(e.to_string()))
    }

    /// Parses a manifest from raw file contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Manifest`] if the bytes are not UTF-8 or do not
    /// parse as a manifest.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let source = std::str::from_utf8(bytes).map_err(|e| Error::Manifest(e.to_string()))?;
        Self::parse(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_in_order() {
        let manifest = Manifest::parse(
            r#"
            [[artwork]]
            title = "First"
            artist = "A"
            year = "1900"
            image = "first.png"

            [[artwork]]
            title = "Second"
            artist = "B"
            year = "c. 1665"
            image = "second.svg"
            "#,
        )
        .expect("manifest should parse");

        assert_eq!(manifest.artworks.len(), 2);
        assert_eq!(manifest.artworks[0].title, "First");
        assert_eq!(manifest.artworks[1].year, "c. 1665");
        assert_eq!(manifest.artworks[1].image, "second.svg");
    }

    #[test]
    fn empty_manifest_has_no_artworks() {
        let manifest = Manifest::parse("").expect("empty manifest should parse");
        assert!(manifest.artworks.is_empty());
    }

    #[test]
    fn missing_field_is_a_manifest_error() {
        let result = Manifest::parse(
            r#"
            [[artwork]]
            title = "No image"
            artist = "A"
            year = "1900"
            "#,
        );
        assert!(matches!(result, Err(Error::Manifest(_))));
    }

    #[test]
    fn numeric_year_is_rejected() {
        let result = Manifest::parse(
            r#"
            [[artwork]]
            title = "T"
            artist = "A"
            year = 1900
            image = "t.png"
            "#,
        );
        assert!(matches!(result, Err(Error::Manifest(_))));
    }

    #[test]
    fn invalid_utf8_is_a_manifest_error() {
        let bytes = b"[[artwork]]\ntitle = \"\xff\"\n";
        match Manifest::from_bytes(bytes) {
            Err(Error::Manifest(_)) => {}
            other => panic!("expected Manifest error, got {other:?}"),
        }
    }
}
