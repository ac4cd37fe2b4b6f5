// SPDX-License-Identifier: MPL-2.0
//! Brightness, contrast and saturation sliders.
//!
//! Moving a slider only changes the live filters; releasing it commits a
//! history entry unless the filters already match the current entry.

use crate::domain::editing::{FilterKind, FilterPercent};
use crate::ui::image_editor::State;

impl State {
    /// Live preview of a slider position.
    pub(crate) fn sidebar_filter_changed(&mut self, kind: FilterKind, value: f32) {
        let value = FilterPercent::new(value);
        if self.filters.get(kind) == value {
            return;
        }
        self.filters.set(kind, value);
        self.invalidate_filtered();
    }

    /// Records the live filters. No-op when nothing changed since the
    /// current history entry.
    pub(crate) fn sidebar_filter_released(&mut self) {
        if self.history.current().filters == self.filters {
            return;
        }
        tracing::debug!(filters = ?self.filters, "filters committed");
        self.commit();
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::editing::FilterKind;
    use crate::ui::image_editor::tests::editor;
    use crate::ui::image_editor::{Message, SidebarMessage};

    #[test]
    fn slider_move_does_not_record_history() {
        let mut state = editor(100, 100);
        state.update(SidebarMessage::FilterChanged(FilterKind::Brightness, 150.0).into());
        assert_eq!(state.filters().brightness.value(), 150.0);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn release_commits_once() {
        let mut state = editor(100, 100);
        state.update(SidebarMessage::FilterChanged(FilterKind::Contrast, 80.0).into());
        state.update(SidebarMessage::FilterChanged(FilterKind::Contrast, 60.0).into());
        state.update(Message::Sidebar(SidebarMessage::FilterReleased));
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history().current().filters.contrast.value(), 60.0);

        // Releasing again with identical filters is a no-op.
        state.update(Message::Sidebar(SidebarMessage::FilterReleased));
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn slider_values_are_clamped() {
        let mut state = editor(100, 100);
        state.update(SidebarMessage::FilterChanged(FilterKind::Saturate, 500.0).into());
        assert_eq!(state.filters().saturate.value(), 200.0);
    }
}
