// SPDX-License-Identifier: MPL-2.0
//! Public-facing view helpers and constructor for the editor facade.

use crate::application::port::AiIntensity;
use crate::config::Config;
use crate::domain::editing::{CropRatio, ImageFilters, SheetCopies, Size};
use crate::error::Error;
use crate::media::image_transform::{apply_filters, rgba_to_pixmap};
use crate::media::LoadedPhoto;
use crate::ui::state::{DragState, Viewport, ZoomStep};
use iced::widget::image;
use iced::Element;
use std::sync::Arc;

use super::render::{self, CropLayer, Scene};
use super::state::{CropState, EnhanceState, GuideToggles, History, SheetState};
use super::{view, Message, State};

/// Contextual data needed to render the editor view.
pub struct ViewContext<'a> {
    pub i18n: &'a crate::i18n::fluent::I18n,
}

/// User preferences the editor starts from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EditorSettings {
    pub zoom_step: ZoomStep,
    pub crop_ratio: CropRatio,
    pub guides: GuideToggles,
    pub sheet_copies: SheetCopies,
    pub intensity: AiIntensity,
}

impl From<&Config> for EditorSettings {
    fn from(config: &Config) -> Self {
        let defaults = GuideToggles::default();
        Self {
            zoom_step: ZoomStep::new(config.zoom_step()),
            crop_ratio: config.editor.default_ratio.unwrap_or_default(),
            guides: GuideToggles {
                crop_guides: config
                    .editor
                    .show_crop_guides
                    .unwrap_or(defaults.crop_guides),
                biometric_guides: config
                    .editor
                    .show_biometric_guides
                    .unwrap_or(defaults.biometric_guides),
            },
            sheet_copies: config.sheet.copies.unwrap_or_default(),
            intensity: config.ai.intensity.unwrap_or_default(),
        }
    }
}

/// Message shown in the dismissible error panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorMessage {
    /// i18n key of the headline.
    pub key: &'static str,
    /// Technical detail, shown verbatim.
    pub detail: String,
}

impl From<&Error> for ErrorMessage {
    fn from(err: &Error) -> Self {
        Self {
            key: err.i18n_key(),
            detail: err.to_string(),
        }
    }
}

/// What the last preview was rendered from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FrameKey {
    surface: Size,
    viewport: Viewport,
    crop: Option<CropLayer>,
}

impl State {
    /// Create editor state for a freshly loaded photo.
    ///
    /// History starts with a single entry. The viewport is fitted once the
    /// canvas reports its size.
    #[must_use]
    pub fn new(loaded: LoadedPhoto, settings: &EditorSettings) -> Self {
        let LoadedPhoto { photo, mime } = loaded;
        let viewport = Viewport::default();
        let filters = ImageFilters::default();
        let history = History::new(super::Snapshot {
            current: photo.clone(),
            original: photo.clone(),
            filters,
            viewport,
        });

        Self {
            original: photo.clone(),
            current: photo,
            mime,
            filters,
            viewport,
            surface: Size::default(),
            crop: CropState::new(settings.crop_ratio),
            history,
            guides: settings.guides,
            drag: DragState::default(),
            zoom_step: settings.zoom_step,
            enhance: EnhanceState::new(settings.intensity),
            sheet: SheetState::new(settings.sheet_copies),
            error: None,
            filtered: None,
            frame: None,
            frame_key: None,
        }
    }

    /// Render the editor view.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::render(self, ctx)
    }

    /// Crop overlay as drawn, if cropping.
    pub(crate) fn crop_layer(&self) -> Option<CropLayer> {
        self.crop.mode.session().map(|session| CropLayer {
            rect: session.rect,
            rotation: session.rotation,
            guides: self.guides,
        })
    }

    pub(crate) fn fit_to_surface(&mut self) {
        let image = self.photo_size();
        self.viewport.fit(self.surface, image);
    }

    /// Drops the cached filtered photo after a filter or image change.
    pub(crate) fn invalidate_filtered(&mut self) {
        self.filtered = None;
    }

    /// Re-renders the preview when its inputs changed.
    pub(crate) fn render_frame(&mut self) {
        if !self.surface.is_drawable() {
            self.frame = None;
            self.frame_key = None;
            return;
        }

        let key = FrameKey {
            surface: self.surface,
            viewport: self.viewport,
            crop: self.crop_layer(),
        };
        if self.filtered.is_some() && self.frame.is_some() && self.frame_key == Some(key) {
            return;
        }

        let filtered = match &self.filtered {
            Some(pixmap) => Arc::clone(pixmap),
            None => {
                let pixels = apply_filters(self.current.pixels(), &self.filters);
                let Some(pixmap) = rgba_to_pixmap(&pixels) else {
                    self.frame = None;
                    return;
                };
                let pixmap = Arc::new(pixmap);
                self.filtered = Some(Arc::clone(&pixmap));
                pixmap
            }
        };

        let scene = Scene {
            surface: self.surface,
            photo: &filtered,
            viewport: self.viewport,
            crop: key.crop,
        };
        self.frame = render::render(&scene).map(|pixmap| {
            image::Handle::from_rgba(pixmap.width(), pixmap.height(), pixmap.take())
        });
        self.frame_key = Some(key);
    }
}
