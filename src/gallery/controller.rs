// SPDX-License-Identifier: MPL-2.0
//! Cursor-based navigation over a [`GallerySet`].
//!
//! `GalleryController` is the single owner of the current position. Moving
//! past either end is a no-op rather than an error, so the render layer can
//! read [`GalleryController::view`] after any message without guarding
//! against invalid positions.

use super::artwork::{ArtworkRecord, GallerySet};
use crate::error::GalleryError;
use iced::widget::image::Handle;

/// Direction of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move to the previous artwork.
    Previous,
    /// Move to the next artwork.
    Next,
}

/// Read model consumed by the render layer.
#[derive(Debug, Clone, Copy)]
pub struct GalleryView<'a> {
    pub image: &'a Handle,
    pub title: &'a str,
    pub artist_name: &'a str,
    pub year: &'a str,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// 1-based position of the current artwork.
    pub position: usize,
    pub total: usize,
}

/// Bounded cursor over a non-empty gallery.
///
/// Invariant: `cursor < gallery.len()` for the whole lifetime of the value.
#[derive(Debug, Clone)]
pub struct GalleryController {
    gallery: GallerySet,
    cursor: usize,
}

impl GalleryController {
    /// Creates a controller positioned at `initial`.
    ///
    /// An `initial` past the end is clamped to the last artwork.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidInitialIndex`] if the gallery is empty.
    pub fn new(gallery: GallerySet, initial: usize) -> Result<Self, GalleryError> {
        let Some(last) = gallery.len().checked_sub(1) else {
            return Err(GalleryError::InvalidInitialIndex);
        };

        let cursor = initial.min(last);
        if cursor != initial {
            tracing::debug!(initial, cursor, "clamped initial gallery index");
        }

        Ok(Self { gallery, cursor })
    }

    /// Creates a controller positioned at the first artwork.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::InvalidInitialIndex`] if the gallery is empty.
    pub fn with_first(gallery: GallerySet) -> Result<Self, GalleryError> {
        Self::new(gallery, 0)
    }

    pub fn current(&self) -> &ArtworkRecord {
        &self.gallery[self.cursor]
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.cursor += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.can_go_previous() {
            self.cursor -= 1;
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.cursor + 1 < self.gallery.len()
    }

    /// Moves one step in `direction` and reports whether the cursor changed.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let before = self.cursor;
        match direction {
            Direction::Previous => self.previous(),
            Direction::Next => self.next(),
        }
        self.cursor != before
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of artworks; never zero.
    pub fn total(&self) -> usize {
        self.gallery.len()
    }

    /// Builds the read model for the current position.
    pub fn view(&self) -> GalleryView<'_> {
        let current = self.current();
        GalleryView {
            image: current.image(),
            title: current.title(),
            artist_name: current.artist_name(),
            year: current.year(),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
            position: self.cursor + 1,
            total: self.gallery.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::test_support::sample_gallery;

    fn controller(len: usize, initial: usize) -> GalleryController {
        GalleryController::new(sample_gallery(len), initial).expect("gallery is not empty")
    }

    #[test]
    fn empty_gallery_is_rejected() {
        let result = GalleryController::new(GallerySet::new(Vec::new()), 0);
        assert!(matches!(result, Err(GalleryError::InvalidInitialIndex)));
        assert!(GalleryController::with_first(GallerySet::new(Vec::new())).is_err());
    }

    #[test]
    fn initial_index_past_the_end_is_clamped() {
        assert_eq!(controller(4, 10).cursor(), 3);
        assert_eq!(controller(4, usize::MAX).cursor(), 3);
    }

    #[test]
    fn initial_index_in_range_is_kept() {
        assert_eq!(controller(4, 2).cursor(), 2);
        assert_eq!(controller(4, 2).current().title(), "Artwork 3");
    }

    #[test]
    fn next_then_previous_walks_the_expected_sequence() {
        let mut nav = controller(4, 0);
        let mut cursors = vec![nav.cursor()];
        for _ in 0..4 {
            nav.next();
            cursors.push(nav.cursor());
        }
        nav.previous();
        cursors.push(nav.cursor());
        assert_eq!(cursors, [0, 1, 2, 3, 3, 2]);
    }

    #[test]
    fn can_go_next_is_false_only_on_last_artwork() {
        let mut nav = controller(4, 0);
        for expected in [true, true, true, false] {
            assert_eq!(nav.can_go_next(), expected, "cursor {}", nav.cursor());
            nav.next();
        }
    }

    #[test]
    fn boundary_moves_are_no_ops() {
        let mut nav = controller(4, 0);
        nav.previous();
        assert_eq!(nav.cursor(), 0);
        assert!(!nav.navigate(Direction::Previous));

        let mut nav = controller(4, 3);
        nav.next();
        assert_eq!(nav.cursor(), 3);
        assert!(!nav.navigate(Direction::Next));
    }

    #[test]
    fn single_artwork_cannot_move() {
        let mut nav = controller(1, 0);
        assert!(!nav.can_go_previous());
        assert!(!nav.can_go_next());
        nav.next();
        nav.previous();
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn navigate_reports_movement() {
        let mut nav = controller(3, 0);
        assert!(nav.navigate(Direction::Next));
        assert_eq!(nav.cursor(), 1);
        assert!(nav.navigate(Direction::Previous));
        assert_eq!(nav.cursor(), 0);
    }

    #[test]
    fn cursor_stays_in_bounds_for_every_short_sequence() {
        // Every sequence of up to 8 moves, encoded as bits, for galleries of 1..=5.
        for len in 1..=5 {
            for steps in 0..=8u32 {
                for bits in 0..(1u32 << steps) {
                    let mut nav = controller(len, 0);
                    for step in 0..steps {
                        if bits & (1 << step) == 0 {
                            nav.previous();
                        } else {
                            nav.next();
                        }
                        assert!(nav.cursor() < len);
                        assert_eq!(nav.can_go_previous(), nav.cursor() != 0);
                        assert_eq!(nav.can_go_next(), nav.cursor() != len - 1);
                    }
                }
            }
        }
    }

    #[test]
    fn next_then_previous_returns_to_start_when_both_are_legal() {
        for len in 2..=5 {
            for start in 0..len - 1 {
                let mut nav = controller(len, start);
                nav.next();
                assert!(nav.can_go_previous());
                nav.previous();
                assert_eq!(nav.cursor(), start);
            }
        }
    }

    #[test]
    fn view_reflects_current_artwork() {
        let mut nav = controller(4, 0);
        nav.next();
        let view = nav.view();
        assert_eq!(view.title, "Artwork 2");
        assert_eq!(view.artist_name, "Artist 2");
        assert_eq!(view.year, "1902");
        assert!(view.can_go_previous);
        assert!(view.can_go_next);
        assert_eq!((view.position, view.total), (2, 4));
        assert_eq!(view.image, nav.current().image());
    }
}
