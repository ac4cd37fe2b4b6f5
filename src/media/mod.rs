// SPDX-License-Identifier: MPL-2.0
//! Pixel-level work on photos: decoding, filtering, cropping and export.

pub mod export;
pub mod image;
pub mod image_transform;
pub mod sheet;

pub use export::ExportKind;
pub use image::{decode_photo, load_photo, LoadedPhoto, Photo};
pub use sheet::SheetLayout;

/// File extensions accepted by the open dialog.
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
