// SPDX-License-Identifier: MPL-2.0
//! Pixel operations: color filters, crop baking and encoding.
//!
//! Filters follow the CSS filter functions, applied in order brightness,
//! contrast, saturate, with each step clamped to the channel range.

use crate::config::MAX_OUTPUT_DIMENSION;
use crate::domain::editing::{ImageFilters, Point, Rect, RotationDegrees};
use crate::domain::media::{EncodedImage, ImageMime};
use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::{ImageFormat, Rgb, RgbImage, RgbaImage};
use std::io::Cursor;
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, Mask, PathBuilder, Pixmap, PixmapPaint, PremultipliedColorU8,
    Transform,
};

/// Quality used for exported JPEGs.
pub const EXPORT_JPEG_QUALITY: u8 = 100;

/// Quality used when a JPEG upload is re-encoded for the AI service.
const UPLOAD_JPEG_QUALITY: u8 = 92;

// ==========================================================================
// Filters
// ==========================================================================

/// Precomputed brightness and contrast table plus the saturation matrix.
#[derive(Debug, Clone)]
pub struct FilterLut {
    tone: [u8; 256],
    saturation: Option<[[f32; 3]; 3]>,
}

impl FilterLut {
    #[must_use]
    pub fn new(filters: &ImageFilters) -> Self {
        let brightness = filters.brightness.as_factor();
        let contrast = filters.contrast.as_factor();
        let mut tone = [0u8; 256];
        for (value, slot) in tone.iter_mut().enumerate() {
            let v = value as f32 / 255.0;
            let v = (v * brightness).clamp(0.0, 1.0);
            let v = ((v - 0.5) * contrast + 0.5).clamp(0.0, 1.0);
            *slot = (v * 255.0).round() as u8;
        }

        let saturation = (!filters.saturate.is_neutral())
            .then(|| saturation_matrix(filters.saturate.as_factor()));

        Self { tone, saturation }
    }

    /// Filters one straight-alpha pixel. Alpha is untouched.
    #[must_use]
    pub fn apply(&self, [r, g, b, a]: [u8; 4]) -> [u8; 4] {
        let (r, g, b) = (
            self.tone[r as usize],
            self.tone[g as usize],
            self.tone[b as usize],
        );
        let Some(m) = self.saturation else {
            return [r, g, b, a];
        };
        let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));
        let channel = |row: [f32; 3]| (row[0] * rf + row[1] * gf + row[2] * bf).round().clamp(0.0, 255.0) as u8;
        [channel(m[0]), channel(m[1]), channel(m[2]), a]
    }
}

fn saturation_matrix(s: f32) -> [[f32; 3]; 3] {
    [
        [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
        [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
    ]
}

/// Returns a filtered copy of `image`.
#[must_use]
pub fn apply_filters(image: &RgbaImage, filters: &ImageFilters) -> RgbaImage {
    let mut out = image.clone();
    if filters.is_neutral() {
        return out;
    }
    let lut = FilterLut::new(filters);
    for pixel in out.pixels_mut() {
        pixel.0 = lut.apply(pixel.0);
    }
    out
}

// ==========================================================================
// Pixmap conversion
// ==========================================================================

/// Converts straight RGBA into a premultiplied pixmap.
///
/// Returns `None` for zero-sized images.
#[must_use]
pub fn rgba_to_pixmap(image: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Converts a premultiplied pixmap back to straight RGBA.
#[must_use]
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let color: ColorU8 = PremultipliedColorU8::demultiply(src);
        dst.0 = [color.red(), color.green(), color.blue(), color.alpha()];
    }
    image
}

// ==========================================================================
// Crop
// ==========================================================================

/// Image-space source of a crop: the screen rectangle mapped back through
/// the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRegion {
    /// Top-left of the source rectangle in image pixels. May be negative.
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Maps a screen-space crop rectangle into image space.
    ///
    /// Output dimensions are rounded and at least one pixel.
    pub fn from_screen(crop: &Rect, zoom: f32, pan: Point) -> Result<Self> {
        let width = (crop.width / zoom).round().max(1.0);
        let height = (crop.height / zoom).round().max(1.0);
        let max = MAX_OUTPUT_DIMENSION as f32;
        if !width.is_finite() || !height.is_finite() || width > max || height > max {
            return Err(Error::CropTooLarge {
                width: width.min(u32::MAX as f32) as u32,
                height: height.min(u32::MAX as f32) as u32,
                max: MAX_OUTPUT_DIMENSION,
            });
        }
        Ok(Self {
            origin: Point::new((crop.x - pan.x) / zoom, (crop.y - pan.y) / zoom),
            width: width as u32,
            height: height as u32,
        })
    }
}

/// Bakes a crop: white canvas of the region's size, filtered source drawn
/// 1:1 from the region origin and rotated about the canvas center.
///
/// Only the rotated region itself is painted; corners the rotation uncovers
/// stay white.
pub fn crop_rotated(
    source: &RgbaImage,
    filters: &ImageFilters,
    region: &CropRegion,
    rotation: RotationDegrees,
) -> Result<RgbaImage> {
    let filtered = apply_filters(source, filters);
    let source_pixmap =
        rgba_to_pixmap(&filtered).ok_or_else(|| Error::Image("source image is empty".to_string()))?;
    let mut canvas = Pixmap::new(region.width, region.height)
        .ok_or_else(|| Error::Image("crop region is empty".to_string()))?;
    canvas.fill(tiny_skia::Color::WHITE);

    let (w, h) = (region.width as f32, region.height as f32);
    let rotate = Transform::from_rotate_at(rotation.value(), w / 2.0, h / 2.0);

    let mut mask = Mask::new(region.width, region.height)
        .ok_or_else(|| Error::Image("crop region is empty".to_string()))?;
    let clip = tiny_skia::Rect::from_xywh(0.0, 0.0, w, h)
        .ok_or_else(|| Error::Image("invalid crop region".to_string()))?;
    mask.fill_path(&PathBuilder::from_rect(clip), FillRule::Winding, true, rotate);

    let transform = rotate.pre_translate(-region.origin.x, -region.origin.y);
    let paint = PixmapPaint {
        quality: if rotation.is_zero() {
            FilterQuality::Nearest
        } else {
            FilterQuality::Bilinear
        },
        ..PixmapPaint::default()
    };
    canvas.draw_pixmap(0, 0, source_pixmap.as_ref(), &paint, transform, Some(&mask));

    Ok(pixmap_to_rgba(&canvas))
}

// ==========================================================================
// Encoding
// ==========================================================================

/// Composites straight RGBA over white.
#[must_use]
pub fn flatten_on_white(image: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(image.width(), image.height());
    for (dst, src) in out.pixels_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        let alpha = u16::from(a);
        let blend = |c: u8| ((u16::from(c) * alpha + 255 * (255 - alpha) + 127) / 255) as u8;
        *dst = Rgb([blend(r), blend(g), blend(b)]);
    }
    out
}

/// Encodes as a JPEG at the given quality, flattened on white.
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = flatten_on_white(image);
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(&rgb)?;
    Ok(bytes)
}

/// Encodes `image` in `mime` for sending to a remote service.
pub fn encode_for_upload(image: &RgbaImage, mime: ImageMime) -> Result<EncodedImage> {
    let bytes = match mime {
        ImageMime::Jpeg => encode_jpeg(image, UPLOAD_JPEG_QUALITY)?,
        ImageMime::Png => {
            let mut bytes = Vec::new();
            image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
            bytes
        }
    };
    Ok(EncodedImage { bytes, mime })
}
