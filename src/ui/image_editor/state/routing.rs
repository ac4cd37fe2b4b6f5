// SPDX-License-Identifier: MPL-2.0
//! Message routing helpers that keep the editor facade slim.
//!
//! Availability rules live here: while an AI request is in flight every
//! mutating action is dropped, and while cropping the viewport buttons,
//! filters and exports are. Wheel zoom and drag-pan are always available.

use crate::domain::editing::{RotationDegrees, Size};
use crate::media::ExportKind;
use crate::ui::image_editor::state::history::History;
use crate::ui::image_editor::{CanvasMessage, Event, SidebarMessage, State, ToolbarMessage};
use iced::keyboard;

impl State {
    pub(crate) fn handle_toolbar_message(&mut self, message: ToolbarMessage) -> Event {
        match message {
            ToolbarMessage::ZoomIn => {
                if self.viewport_locked() {
                    return Event::None;
                }
                self.viewport.zoom_in(self.zoom_step);
                Event::None
            }
            ToolbarMessage::ZoomOut => {
                if self.viewport_locked() {
                    return Event::None;
                }
                self.viewport.zoom_out(self.zoom_step);
                Event::None
            }
            ToolbarMessage::Fit => {
                if self.viewport_locked() {
                    return Event::None;
                }
                self.fit_to_surface();
                Event::None
            }
            ToolbarMessage::Undo => {
                if !self.is_busy() {
                    self.undo();
                }
                Event::None
            }
            ToolbarMessage::Redo => {
                if !self.is_busy() {
                    self.redo();
                }
                Event::None
            }
            ToolbarMessage::Reset => {
                if !self.is_busy() && !self.is_cropping() {
                    self.reset();
                }
                Event::None
            }
            ToolbarMessage::ChangeImage => {
                if self.is_busy() {
                    Event::None
                } else {
                    Event::ChangeImage
                }
            }
        }
    }

    pub(crate) fn handle_sidebar_message(&mut self, message: SidebarMessage) -> Event {
        if self.is_busy() {
            return Event::None;
        }

        match message {
            SidebarMessage::FilterChanged(kind, value) => {
                if !self.is_cropping() {
                    self.sidebar_filter_changed(kind, value);
                }
                Event::None
            }
            SidebarMessage::FilterReleased => {
                if !self.is_cropping() {
                    self.sidebar_filter_released();
                }
                Event::None
            }
            SidebarMessage::ToggleCrop => {
                self.drag.stop();
                if self.is_cropping() {
                    self.crop.cancel();
                    tracing::debug!("crop cancelled");
                } else if self.surface.is_drawable() {
                    self.crop.begin(self.surface);
                    tracing::debug!(ratio = ?self.crop.ratio, "crop started");
                }
                Event::None
            }
            SidebarMessage::SetCropRatio(ratio) => {
                self.crop.set_ratio(ratio, self.surface);
                Event::None
            }
            SidebarMessage::RotationChanged(degrees) => {
                self.crop.set_rotation(RotationDegrees::new(degrees));
                Event::None
            }
            SidebarMessage::ApplyCrop => {
                self.apply_crop();
                Event::None
            }
            SidebarMessage::ToggleCropGuides(visible) => {
                self.guides.crop_guides = visible;
                Event::None
            }
            SidebarMessage::ToggleBiometricGuides(visible) => {
                self.guides.biometric_guides = visible;
                Event::None
            }
            SidebarMessage::SetIntensity(intensity) => {
                self.enhance.intensity = intensity;
                Event::None
            }
            SidebarMessage::Enhance => self.sidebar_enhance(),
            SidebarMessage::Download => {
                if self.is_cropping() {
                    return Event::None;
                }
                Event::ExportRequested {
                    kind: ExportKind::Photo,
                    photo: self.current.clone(),
                    filters: self.filters,
                }
            }
            SidebarMessage::OpenSheet => {
                self.open_sheet();
                Event::None
            }
        }
    }

    pub(crate) fn handle_canvas_message(&mut self, message: CanvasMessage) -> Event {
        match message {
            CanvasMessage::SurfaceResized(size) => self.surface_resized(size),
            CanvasMessage::MouseDown(position) => {
                if !self.crop.grab_handle(position) {
                    self.drag.start(position, self.viewport.pan());
                }
            }
            CanvasMessage::MouseMove(position) => {
                if !self.crop.drag_handle(position) {
                    if let Some(pan) = self.drag.calculate_pan(position) {
                        self.viewport.set_pan(pan);
                    }
                }
            }
            CanvasMessage::MouseUp => {
                self.crop.release_handle();
                self.drag.stop();
            }
            CanvasMessage::Wheel { position, zoom_in } => {
                self.viewport.wheel_zoom(position, zoom_in);
            }
        }
        Event::None
    }

    pub(crate) fn handle_raw_event(&mut self, event: &iced::Event) -> Event {
        let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return Event::None;
        };

        self.handle_shortcut(key.as_ref(), *modifiers);
        Event::None
    }

    /// Escape closes the sheet or cancels cropping; Ctrl+Z undoes, Ctrl+Y
    /// and Ctrl+Shift+Z redo. History shortcuts are inert while busy or
    /// while the sheet is open.
    pub(crate) fn handle_shortcut(
        &mut self,
        key: keyboard::Key<&str>,
        modifiers: keyboard::Modifiers,
    ) {
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                if self.sheet.is_open() {
                    self.sheet.close();
                } else if self.is_cropping() && !self.is_busy() {
                    self.drag.stop();
                    self.crop.cancel();
                }
            }
            keyboard::Key::Character(c) if modifiers.command() => {
                if self.is_busy() || self.sheet.is_open() {
                    return;
                }
                if c.eq_ignore_ascii_case("z") {
                    if modifiers.shift() {
                        self.redo();
                    } else {
                        self.undo();
                    }
                } else if c.eq_ignore_ascii_case("y") {
                    self.redo();
                }
            }
            _ => {}
        }
    }

    /// Zoom buttons and fit are unavailable while cropping or busy.
    fn viewport_locked(&self) -> bool {
        self.is_cropping() || self.is_busy()
    }

    /// Tracks the canvas size. Cropping rebuilds the rectangle for the new
    /// surface; otherwise the photo is refitted.
    fn surface_resized(&mut self, size: Size) {
        if self.surface == size {
            return;
        }
        let first_layout = !self.surface.is_drawable();
        self.surface = size;

        if self.is_cropping() {
            self.crop.reinitialize(size);
        } else {
            self.fit_to_surface();
        }

        // The first layout completes the load: the initial entry records the
        // fitted viewport.
        if first_layout && self.history.len() == 1 {
            self.history = History::new(self.snapshot());
        }
    }
}
