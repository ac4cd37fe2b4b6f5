// SPDX-License-Identifier: MPL-2.0
//! ID photo editor: viewport, crop, filters, history, AI retouch and export.
//!
//! This module follows a "state down, messages up" pattern. [`State::update`]
//! is the only mutation path; side effects that leave the editor (network,
//! dialogs, file writes) are returned as [`Event`]s for the application.
//! After every update the preview frame is re-rendered from the new state.

use crate::domain::editing::{ImageFilters, Size};
use crate::domain::media::ImageMime;
use crate::media::Photo;
use crate::ui::state::{DragState, Viewport, ZoomStep};
use iced::widget::image;
use std::sync::Arc;
use tiny_skia::Pixmap;

mod component;
mod messages;
mod overlay;
pub mod render;
pub mod state;
mod view;

pub use self::state::crop::{CropMode, CropSession, CropState, HandlePosition};
pub use self::state::enhance::EnhanceState;
pub use self::state::guides::GuideToggles;
pub use self::state::history::History;
pub use self::state::session::Snapshot;
pub use self::state::sheet::{SheetPreview, SheetState};
pub use component::{EditorSettings, ErrorMessage, ViewContext};
pub use messages::{CanvasMessage, Event, Message, SheetMessage, SidebarMessage, ToolbarMessage};

/// Local UI state for the editor screen.
#[derive(Clone)]
pub struct State {
    /// Baseline restored by "reset". Replaced by crop and AI results.
    original: Photo,
    current: Photo,
    /// Format of the uploaded file, reused for AI uploads.
    mime: ImageMime,
    /// Live filter values (slider positions).
    filters: ImageFilters,
    viewport: Viewport,
    /// Size of the drawing surface, tracked from the canvas bounds.
    surface: Size,
    crop: CropState,
    history: History<Snapshot>,
    guides: GuideToggles,
    drag: DragState,
    zoom_step: ZoomStep,
    enhance: EnhanceState,
    sheet: SheetState,
    error: Option<ErrorMessage>,
    /// `current` with `filters` applied, ready for compositing.
    filtered: Option<Arc<Pixmap>>,
    /// Last rendered preview.
    frame: Option<image::Handle>,
    frame_key: Option<component::FrameKey>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("mime", &self.mime)
            .field("filters", &self.filters)
            .field("viewport", &self.viewport)
            .field("surface", &self.surface)
            .field("crop", &self.crop)
            .field("history_index", &self.history.index())
            .field("history_len", &self.history.len())
            .field("busy", &self.enhance.is_busy())
            .finish_non_exhaustive()
    }
}

impl State {
    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        let event = match message {
            Message::Toolbar(msg) => self.handle_toolbar_message(msg),
            Message::Sidebar(msg) => self.handle_sidebar_message(msg),
            Message::Canvas(msg) => self.handle_canvas_message(msg),
            Message::Sheet(msg) => self.handle_sheet_message(msg),
            Message::RawEvent(event) => self.handle_raw_event(&event),
            Message::DismissError => {
                self.error = None;
                Event::None
            }
            Message::EnhanceFinished(result) => {
                self.finish_enhance(result);
                Event::None
            }
            Message::ExportFailed(error) => {
                self.error = Some(error);
                Event::None
            }
        };
        self.render_frame();
        event
    }

    pub fn current_photo(&self) -> &Photo {
        &self.current
    }

    pub fn original_photo(&self) -> &Photo {
        &self.original
    }

    pub fn mime(&self) -> ImageMime {
        self.mime
    }

    pub fn filters(&self) -> ImageFilters {
        self.filters
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn crop(&self) -> &CropState {
        &self.crop
    }

    pub fn is_cropping(&self) -> bool {
        self.crop.mode.is_cropping()
    }

    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn guides(&self) -> GuideToggles {
        self.guides
    }

    pub fn is_busy(&self) -> bool {
        self.enhance.is_busy()
    }

    pub fn enhance(&self) -> &EnhanceState {
        &self.enhance
    }

    pub fn sheet(&self) -> &SheetState {
        &self.sheet
    }

    pub fn error(&self) -> Option<&ErrorMessage> {
        self.error.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    /// Pixel size of the current photo.
    pub fn photo_size(&self) -> Size {
        Size::new(self.current.width() as f32, self.current.height() as f32)
    }

    pub(crate) fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }
}

#[cfg(test)]
mod tests;
