// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Image(String),
    Config(String),
    Manifest(String),
    Gallery(GalleryError),
}

/// Errors raised while building the gallery navigation state.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryError {
    /// The gallery has no artwork, so no cursor position is valid.
    InvalidInitialIndex,
}

impl GalleryError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GalleryError::InvalidInitialIndex => "error-gallery-empty",
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::InvalidInitialIndex => {
                write!(f, "Invalid initial index: the gallery is empty")
            }
        }
    }
}

impl Error {
    /// Returns the i18n message key used by the fallback screen.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Gallery(err) => err.i18n_key(),
            Error::Io(_) => "error-gallery-io",
            Error::Svg(_) | Error::Image(_) => "error-gallery-image",
            Error::Manifest(_) => "error-gallery-manifest",
            Error::Config(_) => "error-config",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Gallery(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn gallery_error_converts_and_keeps_its_key() {
        let err: Error = GalleryError::InvalidInitialIndex.into();
        assert!(matches!(
            err,
            Error::Gallery(GalleryError::InvalidInitialIndex)
        ));
        assert_eq!(err.i18n_key(), "error-gallery-empty");
        assert!(format!("{}", err).contains("empty"));
    }

    #[test]
    fn image_errors_share_a_message_key() {
        assert_eq!(Error::Svg("x".into()).i18n_key(), "error-gallery-image");
        assert_eq!(Error::Image("x".into()).i18n_key(), "error-gallery-image");
        assert_eq!(
            Error::Manifest("x".into()).i18n_key(),
            "error-gallery-manifest"
        );
    }

    #[test]
    fn image_error_conversion_returns_image_variant() {
        let io_err = std::io::Error::other("decode failed");
        let image_error = image_rs::ImageError::IoError(io_err);
        let error: Error = image_error.into();
        match error {
            Error::Image(message) => assert!(message.contains("decode failed")),
            other => panic!("expected Image variant, got {other:?}"),
        }
    }
}
