// SPDX-License-Identifier: MPL-2.0
//! Print sheet modal: copy count plus a pannable, zoomable preview.
//!
//! The preview is composed at print resolution with the live filters, so
//! what is shown is exactly what the download writes.

use crate::domain::editing::{Point, SheetCopies, Size};
use crate::error::Result;
use crate::media::image_transform::apply_filters;
use crate::media::sheet::compose_sheet;
use crate::media::{ExportKind, Photo};
use crate::ui::image_editor::{CanvasMessage, ErrorMessage, Event, SheetMessage, State};
use crate::ui::state::{DragState, Viewport};
use iced::widget::image;

/// Composed sheet with its own viewport.
#[derive(Debug, Clone)]
pub struct SheetPreview {
    sheet: Photo,
    handle: image::Handle,
    viewport: Viewport,
    drag: DragState,
    surface: Size,
}

impl SheetPreview {
    fn new(sheet: Photo) -> Self {
        let handle = image::Handle::from_rgba(
            sheet.width(),
            sheet.height(),
            sheet.pixels().as_raw().clone(),
        );
        Self {
            sheet,
            handle,
            viewport: Viewport::default(),
            drag: DragState::default(),
            surface: Size::default(),
        }
    }

    #[must_use]
    pub fn sheet(&self) -> &Photo {
        &self.sheet
    }

    #[must_use]
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Preview surface as last reported by the canvas.
    #[must_use]
    pub fn surface(&self) -> Size {
        self.surface
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.sheet.width() as f32, self.sheet.height() as f32)
    }

    fn fit(&mut self) {
        self.viewport.fit(self.surface, self.size());
    }

    /// Replaces the composed sheet, keeping the surface and refitting.
    fn replace(&mut self, sheet: Photo) {
        let surface = self.surface;
        *self = Self::new(sheet);
        self.surface = surface;
        self.fit();
    }

    fn handle_canvas(&mut self, message: CanvasMessage) {
        match message {
            CanvasMessage::SurfaceResized(size) => {
                if self.surface != size {
                    self.surface = size;
                    self.fit();
                }
            }
            CanvasMessage::MouseDown(position) => self.drag.start(position, self.viewport.pan()),
            CanvasMessage::MouseMove(position) => {
                if let Some(pan) = self.drag.calculate_pan(position) {
                    self.viewport.set_pan(pan);
                }
            }
            CanvasMessage::MouseUp => self.drag.stop(),
            CanvasMessage::Wheel { position, zoom_in } => {
                self.viewport.wheel_zoom(position, zoom_in);
            }
        }
    }
}

/// Copy count (kept between openings) and the open preview, if any.
#[derive(Debug, Clone, Default)]
pub struct SheetState {
    pub copies: SheetCopies,
    preview: Option<SheetPreview>,
}

impl SheetState {
    #[must_use]
    pub fn new(copies: SheetCopies) -> Self {
        Self {
            copies,
            preview: None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.preview.is_some()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&SheetPreview> {
        self.preview.as_ref()
    }

    pub(crate) fn close(&mut self) {
        self.preview = None;
    }
}

impl State {
    fn compose_sheet_photo(&self) -> Result<Photo> {
        let filtered = apply_filters(self.current.pixels(), &self.filters);
        compose_sheet(&filtered, self.sheet.copies).map(Photo::new)
    }

    pub(crate) fn open_sheet(&mut self) {
        if self.is_busy() || self.is_cropping() {
            return;
        }
        match self.compose_sheet_photo() {
            Ok(sheet) => {
                tracing::debug!(
                    copies = self.sheet.copies.count(),
                    width = sheet.width(),
                    height = sheet.height(),
                    "sheet preview opened"
                );
                self.drag.stop();
                self.sheet.preview = Some(SheetPreview::new(sheet));
            }
            Err(err) => {
                tracing::warn!(%err, "sheet composition failed");
                self.error = Some(ErrorMessage::from(&err));
            }
        }
    }

    pub(crate) fn handle_sheet_message(&mut self, message: SheetMessage) -> Event {
        match message {
            SheetMessage::SetCopies(copies) => {
                if self.sheet.copies == copies {
                    return Event::None;
                }
                self.sheet.copies = copies;
                if self.sheet.is_open() {
                    match self.compose_sheet_photo() {
                        Ok(sheet) => {
                            if let Some(preview) = self.sheet.preview.as_mut() {
                                preview.replace(sheet);
                            }
                        }
                        Err(err) => self.error = Some(ErrorMessage::from(&err)),
                    }
                }
                Event::None
            }
            SheetMessage::ZoomIn => {
                let step = self.zoom_step;
                if let Some(preview) = self.sheet.preview.as_mut() {
                    preview.viewport.zoom_in(step);
                }
                Event::None
            }
            SheetMessage::ZoomOut => {
                let step = self.zoom_step;
                if let Some(preview) = self.sheet.preview.as_mut() {
                    preview.viewport.zoom_out(step);
                }
                Event::None
            }
            SheetMessage::Fit => {
                if let Some(preview) = self.sheet.preview.as_mut() {
                    preview.fit();
                }
                Event::None
            }
            SheetMessage::Canvas(message) => {
                if let Some(preview) = self.sheet.preview.as_mut() {
                    preview.handle_canvas(message);
                }
                Event::None
            }
            SheetMessage::Download => {
                if !self.sheet.is_open() || self.is_busy() {
                    return Event::None;
                }
                Event::ExportRequested {
                    kind: ExportKind::Sheet(self.sheet.copies),
                    photo: self.current.clone(),
                    filters: self.filters,
                }
            }
            SheetMessage::Close => {
                self.sheet.close();
                Event::None
            }
        }
    }
}
