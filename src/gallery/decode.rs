// SPDX-License-Identifier: MPL-2.0
//! Artwork decoding from encoded bytes (SVG, PNG, JPEG, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;

/// A decoded artwork ready to be displayed.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Returns whether `name` should be rasterized as SVG.
fn is_svg(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Decodes artwork bytes into an image handle.
///
/// The format is chosen from the extension of `name`: SVG sources are
/// rasterized at their natural size with resvg, everything else goes through
/// the `image` crate.
///
/// # Errors
///
/// - [`Error::Svg`] if the SVG cannot be parsed or has empty dimensions
/// - [`Error::Image`] if the raster data cannot be decoded
pub fn decode_artwork(name: &str, bytes: &[u8]) -> Result<DecodedImage> {
    if is_svg(name) {
        decode_svg(bytes)
    } else {
        decode_raster(bytes)
    }
}

fn decode_svg(bytes: &[u8]) -> Result<DecodedImage> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; the handle expects straight RGBA.
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(DecodedImage {
        handle: image::Handle::from_rgba(width, height, rgba),
        width,
        height,
    })
}

fn decode_raster(bytes: &[u8]) -> Result<DecodedImage> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(DecodedImage {
        handle: image::Handle::from_rgba(width, height, pixels),
        width,
        height,
    })
}
