// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::application::port::{AIError, AiIntensity, RetouchRequest};
use crate::domain::editing::{CropRatio, FilterKind, ImageFilters, Point, SheetCopies, Size};
use crate::domain::media::EncodedImage;
use crate::media::{ExportKind, Photo};

use super::ErrorMessage;

/// Toolbar-specific messages.
#[derive(Debug, Clone)]
pub enum ToolbarMessage {
    ZoomIn,
    ZoomOut,
    Fit,
    Undo,
    Redo,
    Reset,
    ChangeImage,
}

/// Sidebar control messages.
#[derive(Debug, Clone)]
pub enum SidebarMessage {
    /// Slider moved (live preview, no history entry)
    FilterChanged(FilterKind, f32),
    /// Slider released (history commit)
    FilterReleased,
    ToggleCrop,
    SetCropRatio(CropRatio),
    RotationChanged(f32),
    ApplyCrop,
    ToggleCropGuides(bool),
    ToggleBiometricGuides(bool),
    SetIntensity(AiIntensity),
    Enhance,
    Download,
    OpenSheet,
}

/// Pointer and surface events from the editing canvas, in surface
/// coordinates.
#[derive(Debug, Clone)]
pub enum CanvasMessage {
    SurfaceResized(Size),
    MouseDown(Point),
    MouseMove(Point),
    MouseUp,
    Wheel { position: Point, zoom_in: bool },
}

/// Messages from the print-sheet modal.
#[derive(Debug, Clone)]
pub enum SheetMessage {
    SetCopies(SheetCopies),
    ZoomIn,
    ZoomOut,
    Fit,
    Canvas(CanvasMessage),
    Download,
    Close,
}

/// Messages emitted directly by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Sidebar(SidebarMessage),
    Canvas(CanvasMessage),
    Sheet(SheetMessage),
    /// Raw event for keyboard shortcuts
    RawEvent(iced::Event),
    DismissError,
    /// Outcome of a retouch request started by [`Event::EnhanceRequested`]
    EnhanceFinished(Result<EncodedImage, AIError>),
    /// An export started by [`Event::ExportRequested`] could not be written.
    ExportFailed(ErrorMessage),
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<SidebarMessage> for Message {
    fn from(message: SidebarMessage) -> Self {
        Message::Sidebar(message)
    }
}

impl From<CanvasMessage> for Message {
    fn from(message: CanvasMessage) -> Self {
        Message::Canvas(message)
    }
}

impl From<SheetMessage> for Message {
    fn from(message: SheetMessage) -> Self {
        Message::Sheet(message)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Send the request to the retouch service and report back with
    /// [`Message::EnhanceFinished`].
    EnhanceRequested(RetouchRequest),
    /// Ask where to save, then encode and write.
    ExportRequested {
        kind: ExportKind,
        photo: Photo,
        filters: ImageFilters,
    },
    /// Discard the session and return to the upload screen.
    ChangeImage,
}
