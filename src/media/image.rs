// SPDX-License-Identifier: MPL-2.0
//! Photo loading and decoding (PNG and JPEG only).

use crate::config::MAX_UPLOAD_BYTES;
use crate::domain::media::ImageMime;
use crate::error::{Error, Result};
use image_rs::{ImageFormat, RgbaImage};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Decoded RGBA photo.
///
/// Pixels are shared through an `Arc`, so history snapshots cost a pointer.
#[derive(Debug, Clone)]
pub struct Photo {
    pixels: Arc<RgbaImage>,
}

impl Photo {
    #[must_use]
    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[must_use]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Whether both handles point at the same pixel buffer.
    #[must_use]
    pub fn same_buffer(&self, other: &Photo) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) || *self.pixels == *other.pixels
    }
}

/// A photo together with the format it was uploaded in.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPhoto {
    pub photo: Photo,
    pub mime: ImageMime,
}

/// Decodes an upload. Anything other than PNG or JPEG is rejected.
///
/// Inputs above the advisory size limit are accepted with a warning.
pub fn decode_photo(bytes: &[u8]) -> Result<LoadedPhoto> {
    let mime = ImageMime::sniff(bytes)
        .ok_or_else(|| Error::UnsupportedFormat("expected a PNG or JPEG file".to_string()))?;

    if bytes.len() as u64 > MAX_UPLOAD_BYTES {
        tracing::warn!(
            size = bytes.len(),
            limit = MAX_UPLOAD_BYTES,
            "photo exceeds the advisory upload size"
        );
    }

    let format = match mime {
        ImageMime::Png => ImageFormat::Png,
        ImageMime::Jpeg => ImageFormat::Jpeg,
    };
    let image = image_rs::load_from_memory_with_format(bytes, format)?;
    let pixels = image.to_rgba8();
    if pixels.width() == 0 || pixels.height() == 0 {
        return Err(Error::Image("image has no pixels".to_string()));
    }

    Ok(LoadedPhoto {
        photo: Photo::new(pixels),
        mime,
    })
}

/// Reads and decodes a photo from disk.
pub fn load_photo<P: AsRef<Path>>(path: P) -> Result<LoadedPhoto> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let loaded = decode_photo(&bytes)?;
    tracing::info!(
        path = %path.display(),
        width = loaded.photo.width(),
        height = loaded.photo.height(),
        mime = loaded.mime.as_str(),
        "photo loaded"
    );
    Ok(loaded)
}
