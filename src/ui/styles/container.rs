// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised surface the artwork is matted on.
///
/// Derived from the active theme background so the frame reads in both
/// light and dark modes.
pub fn artwork_frame(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: shadow::ELEVATED,
        ..Default::default()
    }
}

/// Tinted card holding the title, artist, and year.
pub fn details_card(theme: &Theme) -> container::Style {
    let (tint, text) = if matches!(theme, Theme::Light) {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, palette::WHITE)
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..tint
        })),
        text_color: Some(text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Panel shown when the gallery cannot be opened.
pub fn error_panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
