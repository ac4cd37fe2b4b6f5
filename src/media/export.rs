// SPDX-License-Identifier: MPL-2.0
//! JPEG exports of the edited photo and of the print sheet.

use crate::domain::editing::{ImageFilters, SheetCopies};
use crate::error::Result;
use crate::media::image::Photo;
use crate::media::image_transform::{apply_filters, encode_jpeg, EXPORT_JPEG_QUALITY};
use crate::media::sheet::compose_sheet;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// What is being exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Photo,
    Sheet(SheetCopies),
}

impl ExportKind {
    /// Default file name, stamped with the Unix time in milliseconds.
    #[must_use]
    pub fn file_name(self, now: DateTime<Utc>) -> String {
        let stamp = now.timestamp_millis();
        match self {
            ExportKind::Photo => format!("id-photo-{stamp}.jpg"),
            ExportKind::Sheet(_) => format!("id-photo-sheet-{stamp}.jpg"),
        }
    }
}

/// Renders the export as JPEG bytes with `filters` baked in.
pub fn render(kind: ExportKind, photo: &Photo, filters: &ImageFilters) -> Result<Vec<u8>> {
    let filtered = apply_filters(photo.pixels(), filters);
    let pixels = match kind {
        ExportKind::Photo => filtered,
        ExportKind::Sheet(copies) => compose_sheet(&filtered, copies)?,
    };
    encode_jpeg(&pixels, EXPORT_JPEG_QUALITY)
}

/// Writes encoded bytes, creating missing parent directories.
pub fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    tracing::info!(path = %path.display(), size = bytes.len(), "export written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::ImageMime;
    use crate::media::sheet::SheetLayout;
    use chrono::TimeZone;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn photo() -> Photo {
        Photo::new(RgbaImage::from_pixel(70, 90, Rgba([120, 140, 160, 255])))
    }

    #[test]
    fn file_names_carry_millisecond_stamp() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(ExportKind::Photo.file_name(now), "id-photo-1700000000123.jpg");
        assert_eq!(
            ExportKind::Sheet(SheetCopies::Four).file_name(now),
            "id-photo-sheet-1700000000123.jpg"
        );
    }

    #[test]
    fn photo_export_keeps_dimensions() {
        let bytes = render(ExportKind::Photo, &photo(), &ImageFilters::default()).unwrap();
        assert_eq!(ImageMime::sniff(&bytes), Some(ImageMime::Jpeg));
        let decoded = image_rs::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (70, 90));
    }

    #[test]
    fn sheet_export_has_sheet_dimensions() {
        let bytes = render(
            ExportKind::Sheet(SheetCopies::Four),
            &photo(),
            &ImageFilters::default(),
        )
        .unwrap();
        let decoded = image_rs::load_from_memory(&bytes).unwrap();
        let layout = SheetLayout::new(SheetCopies::Four);
        assert_eq!(
            (decoded.width(), decoded.height()),
            (layout.width(), layout.height())
        );
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.jpg");
        write(&path, b"data").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"data");
    }
}
