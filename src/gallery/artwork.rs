// SPDX-License-Identifier: MPL-2.0
//! Artwork records and the immutable set they are displayed from.

use iced::widget::image::Handle;
use std::ops::Index;
use std::sync::Arc;

/// A single artwork with its display metadata.
///
/// Records are created once by a gallery provider and never mutated. The
/// image handle is opaque: pixel data lives behind it and clones are cheap.
#[derive(Debug, Clone)]
pub struct ArtworkRecord {
    title: String,
    artist_name: String,
    year: String,
    image: Handle,
}

impl ArtworkRecord {
    pub fn new(
        title: impl Into<String>,
        artist_name: impl Into<String>,
        year: impl Into<String>,
        image: Handle,
    ) -> Self {
        Self {
            title: title.into(),
            artist_name: artist_name.into(),
            year: year.into(),
            image,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist_name(&self) -> &str {
        &self.artist_name
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn image(&self) -> &Handle {
        &self.image
    }
}

/// Ordered, fixed-length collection of artworks shared for the whole session.
///
/// Cloning a `GallerySet` only bumps a reference count.
#[derive(Debug, Clone)]
pub struct GallerySet(Arc<[ArtworkRecord]>);

impl GallerySet {
    pub fn new(records: Vec<ArtworkRecord>) -> Self {
        Self(records.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArtworkRecord> {
        self.0.iter()
    }
}

impl Index<usize> for GallerySet {
    type Output = ArtworkRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Vec<ArtworkRecord>> for GallerySet {
    fn from(records: Vec<ArtworkRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<ArtworkRecord> for GallerySet {
    fn from_iter<I: IntoIterator<Item = ArtworkRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a GallerySet {
    type Item = &'a ArtworkRecord;
    type IntoIter = std::slice::Iter<'a, ArtworkRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
