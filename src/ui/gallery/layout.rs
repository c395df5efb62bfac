// SPDX-License-Identifier: MPL-2.0
//! Orientation-dependent sizing of the artwork frame.

use iced::Size;

/// Screen orientation derived from the window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Landscape when the window is strictly wider than tall.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        if size.width > size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Share of the screen given to the artwork frame, as Iced fill portions.
///
/// Portrait: 60% of the height, full width.
/// Landscape: 70% of the height, 35% of the width, centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkLayout {
    /// Portion of the height taken by the frame.
    pub frame_height: u16,
    /// Portion of the height left for the details and buttons.
    pub rest_height: u16,
    /// Portion of the width taken by the frame.
    pub frame_width: u16,
    /// Portion of the width on each side of the frame.
    pub side_margin: u16,
}

impl ArtworkLayout {
    #[must_use]
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self {
                frame_height: 6,
                rest_height: 4,
                frame_width: 1,
                side_margin: 0,
            },
            Orientation::Landscape => Self {
                frame_height: 7,
                rest_height: 3,
                frame_width: 14,
                side_margin: 13,
            },
        }
    }

    #[must_use]
    pub fn height_fraction(&self) -> f32 {
        f32::from(self.frame_height) / f32::from(self.frame_height + self.rest_height)
    }

    #[must_use]
    pub fn width_fraction(&self) -> f32 {
        f32::from(self.frame_width) / f32::from(self.frame_width + 2 * self.side_margin)
    }
}
