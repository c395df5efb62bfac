// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded project SVG into an RGBA icon for the window
//! title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon, in pixels.
const ICON_SIZE: u32 = 128;

const SVG_SOURCE: &str = include_str!("../assets/branding/art_space.svg");

/// Rasterize the embedded SVG icon to a square RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let (rgba, size) = rasterize_icon()?;
    match icon::from_rgba(rgba, size, size) {
        Ok(icon) => Some(icon),
        Err(err) => {
            tracing::warn!(%err, "window icon rejected");
            None
        }
    }
}

fn rasterize_icon() -> Option<(Vec<u8>, u32)> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(%err, "window icon could not be parsed");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = ICON_SIZE as f32 / orig_size.width();
    let scale_y = ICON_SIZE as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some((pixmap.take(), ICON_SIZE))
}
