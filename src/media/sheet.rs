// SPDX-License-Identifier: MPL-2.0
//! Print sheet composition.
//!
//! Copies of the edited photo are laid out in a single row at print size,
//! each cell outlined with a thin black border.

use crate::config::{PHOTO_HEIGHT_MM, PHOTO_WIDTH_MM, SHEET_DPI, SHEET_GAP_MM, SHEET_MARGIN_MM};
use crate::domain::editing::{Rect, SheetCopies};
use crate::error::{Error, Result};
use crate::media::image_transform::{pixmap_to_rgba, rgba_to_pixmap};
use image_rs::RgbaImage;
use tiny_skia::{Color, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

const MM_PER_INCH: f32 = 25.4;

/// Converts millimetres to pixels at `dpi`.
#[must_use]
pub fn mm_to_px(mm: f32, dpi: f32) -> f32 {
    mm / MM_PER_INCH * dpi
}

/// Pixel geometry of a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    pub copies: SheetCopies,
    pub photo_width: f32,
    pub photo_height: f32,
    pub gap: f32,
    pub margin: f32,
}

impl SheetLayout {
    #[must_use]
    pub fn new(copies: SheetCopies) -> Self {
        Self::with_dpi(copies, SHEET_DPI)
    }

    #[must_use]
    pub fn with_dpi(copies: SheetCopies, dpi: f32) -> Self {
        Self {
            copies,
            photo_width: mm_to_px(PHOTO_WIDTH_MM, dpi),
            photo_height: mm_to_px(PHOTO_HEIGHT_MM, dpi),
            gap: mm_to_px(SHEET_GAP_MM, dpi),
            margin: mm_to_px(SHEET_MARGIN_MM, dpi),
        }
    }

    /// Sheet width, truncated to whole pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        let n = self.copies.count() as f32;
        (n * self.photo_width + (n - 1.0) * self.gap + 2.0 * self.margin).floor() as u32
    }

    /// Sheet height, truncated to whole pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        (self.photo_height + 2.0 * self.margin).floor() as u32
    }

    /// Rectangle of the cell at `index`, left to right.
    #[must_use]
    pub fn cell(&self, index: u32) -> Rect {
        Rect::new(
            self.margin + index as f32 * (self.photo_width + self.gap),
            self.margin,
            self.photo_width,
            self.photo_height,
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.copies.count()).map(|index| self.cell(index))
    }
}

/// Renders the sheet. `photo` should already carry the current filters.
pub fn compose_sheet(photo: &RgbaImage, copies: SheetCopies) -> Result<RgbaImage> {
    let layout = SheetLayout::new(copies);
    let source =
        rgba_to_pixmap(photo).ok_or_else(|| Error::Image("photo is empty".to_string()))?;
    let mut sheet = Pixmap::new(layout.width(), layout.height())
        .ok_or_else(|| Error::Image("sheet has no area".to_string()))?;
    sheet.fill(Color::WHITE);

    let scale_x = layout.photo_width / photo.width() as f32;
    let scale_y = layout.photo_height / photo.height() as f32;
    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };

    let mut border = Paint::default();
    border.set_color(Color::BLACK);
    border.anti_alias = true;
    let stroke = Stroke {
        width: 1.0,
        ..Stroke::default()
    };

    for cell in layout.cells() {
        let transform = Transform::from_translate(cell.x, cell.y).pre_scale(scale_x, scale_y);
        sheet.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);

        if let Some(rect) = tiny_skia::Rect::from_xywh(cell.x, cell.y, cell.width, cell.height) {
            let outline = PathBuilder::from_rect(rect);
            sheet.stroke_path(&outline, &border, &stroke, Transform::identity(), None);
        }
    }

    tracing::debug!(
        copies = copies.count(),
        width = layout.width(),
        height = layout.height(),
        "photo sheet composed"
    );
    Ok(pixmap_to_rgba(&sheet))
}
