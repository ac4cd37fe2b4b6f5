// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Payloads are kept as strings so the error stays `Clone` and can travel
//! inside Iced messages.

use crate::application::port::ai::AIError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("image error: {0}")]
    Image(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// The uploaded file is neither PNG nor JPEG.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Crop output would exceed the maximum output dimension.
    #[error("crop output {width}x{height} exceeds the maximum of {max} pixels per side")]
    CropTooLarge { width: u32, height: u32, max: u32 },

    #[error(transparent)]
    Ai(#[from] AIError),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Image(_) => "error-image",
            Error::Config(_) => "error-config",
            Error::UnsupportedFormat(_) => "error-unsupported-format",
            Error::CropTooLarge { .. } => "error-crop-too-large",
            Error::Ai(err) => err.i18n_key(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
