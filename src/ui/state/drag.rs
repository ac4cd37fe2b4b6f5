// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning an image.

use crate::domain::editing::Point;

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Cursor position where the drag started
    pub start_position: Option<Point>,

    /// Pan offset when the drag started
    pub start_pan: Option<Point>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, pan: Point) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_pan = Some(pan);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_pan = None;
    }

    /// Pan that keeps the grabbed image point under the cursor.
    #[must_use]
    pub fn calculate_pan(&self, current_position: Point) -> Option<Point> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_pan = self.start_pan?;

        Some(Point::new(
            start_pan.x + (current_position.x - start_pos.x),
            start_pan.y + (current_position.y - start_pos.y),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
        assert!(state.start_pan.is_none());
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Point::new(20.0, 10.0));
        state.stop();

        assert_eq!(state, DragState::default());
    }

    #[test]
    fn calculate_pan_returns_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.calculate_pan(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn pan_follows_cursor_delta() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Point::new(50.0, 30.0));

        // Cursor moved left/up by 20 pixels; the image follows.
        let pan = state.calculate_pan(Point::new(180.0, 130.0));
        assert_eq!(pan, Some(Point::new(30.0, 10.0)));
    }
}
