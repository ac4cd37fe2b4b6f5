// SPDX-License-Identifier: MPL-2.0
//! History snapshots and the commits that produce them.
//!
//! Every commit (filter release, crop apply, AI result, reset) ends in
//! [`State::commit`]. Undo and redo restore image, baseline, filters and
//! viewport together.

use crate::domain::editing::ImageFilters;
use crate::media::image_transform::{crop_rotated, CropRegion};
use crate::media::Photo;
use crate::ui::image_editor::{ErrorMessage, State};
use crate::ui::state::Viewport;

/// One restorable editor state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub current: Photo,
    pub original: Photo,
    pub filters: ImageFilters,
    pub viewport: Viewport,
}

impl State {
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            current: self.current.clone(),
            original: self.original.clone(),
            filters: self.filters,
            viewport: self.viewport,
        }
    }

    /// Pushes the live state as a new history entry.
    pub(crate) fn commit(&mut self) {
        self.history.push(self.snapshot());
        tracing::debug!(
            index = self.history.index(),
            len = self.history.len(),
            "history entry recorded"
        );
    }

    fn restore(&mut self, snapshot: Snapshot) {
        let image_changed = !snapshot.current.same_buffer(&self.current);
        self.current = snapshot.current;
        self.original = snapshot.original;
        self.filters = snapshot.filters;
        self.viewport = snapshot.viewport;
        if image_changed {
            self.filtered = None;
        } else {
            self.invalidate_filtered();
        }
    }

    /// Steps back one entry. Drags stop; an open crop session stays open.
    pub(crate) fn undo(&mut self) {
        self.drag.stop();
        self.crop.release_handle();
        if let Some(snapshot) = self.history.undo().cloned() {
            self.restore(snapshot);
        }
    }

    pub(crate) fn redo(&mut self) {
        self.drag.stop();
        self.crop.release_handle();
        if let Some(snapshot) = self.history.redo().cloned() {
            self.restore(snapshot);
        }
    }

    /// Back to the baseline with neutral filters.
    pub(crate) fn reset(&mut self) {
        self.current = self.original.clone();
        self.filters = ImageFilters::default();
        self.error = None;
        self.filtered = None;
        self.fit_to_surface();
        self.commit();
        tracing::info!("edits reset to baseline");
    }

    /// Replaces both the current image and the baseline, as crop apply and
    /// AI retouch do, then fits and records the result.
    pub(crate) fn replace_photo(&mut self, photo: Photo) {
        self.original = photo.clone();
        self.current = photo;
        self.filters = ImageFilters::default();
        self.filtered = None;
        self.drag.stop();
        self.crop.cancel();
        self.fit_to_surface();
        self.commit();
    }

    /// Bakes the crop rectangle, rotation and filters into new pixels.
    ///
    /// On failure the session stays open and the error is shown.
    pub(crate) fn apply_crop(&mut self) {
        let Some(session) = self.crop.mode.session() else {
            return;
        };
        let zoom = self.viewport.zoom().value();
        let result = CropRegion::from_screen(&session.rect, zoom, self.viewport.pan()).and_then(
            |region| {
                crop_rotated(
                    self.current.pixels(),
                    &self.filters,
                    &region,
                    session.rotation,
                )
            },
        );

        match result {
            Ok(pixels) => {
                tracing::info!(
                    width = pixels.width(),
                    height = pixels.height(),
                    rotation = session.rotation.value(),
                    "crop applied"
                );
                self.replace_photo(Photo::new(pixels));
            }
            Err(err) => {
                tracing::warn!(%err, "crop apply failed");
                self.error = Some(ErrorMessage::from(&err));
            }
        }
    }
}
