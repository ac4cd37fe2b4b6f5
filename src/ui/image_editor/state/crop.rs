// SPDX-License-Identifier: MPL-2.0
//! Crop tool state and helpers.
//!
//! The crop rectangle lives in screen space and is always aspect-locked:
//! resizing derives the height from the dragged width, never the reverse.

use crate::config::{CROP_HANDLE_HIT_FACTOR, CROP_HANDLE_SIZE, CROP_PADDING, MIN_CROP_DIMENSION};
use crate::domain::editing::{CropRatio, Point, Rect, RotationDegrees, Size};

/// Position of a resize handle on the crop rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl HandlePosition {
    /// Hit-test order.
    pub const ALL: [HandlePosition; 4] = [
        HandlePosition::TopLeft,
        HandlePosition::TopRight,
        HandlePosition::BottomLeft,
        HandlePosition::BottomRight,
    ];

    /// Corner of `rect` this handle sits on.
    #[must_use]
    pub fn anchor(self, rect: &Rect) -> Point {
        match self {
            HandlePosition::TopLeft => Point::new(rect.x, rect.y),
            HandlePosition::TopRight => Point::new(rect.right(), rect.y),
            HandlePosition::BottomLeft => Point::new(rect.x, rect.bottom()),
            HandlePosition::BottomRight => Point::new(rect.right(), rect.bottom()),
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, HandlePosition::TopLeft | HandlePosition::TopRight)
    }

    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, HandlePosition::TopLeft | HandlePosition::BottomLeft)
    }
}

/// Live crop tool data; exists only while cropping.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSession {
    pub rect: Rect,
    pub rotation: RotationDegrees,
    /// Handle being dragged, if any.
    pub active_handle: Option<HandlePosition>,
}

impl CropSession {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            rotation: RotationDegrees::default(),
            active_handle: None,
        }
    }
}

/// Crop tool mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CropMode {
    #[default]
    Idle,
    Cropping(CropSession),
}

impl CropMode {
    #[must_use]
    pub fn is_cropping(&self) -> bool {
        matches!(self, CropMode::Cropping(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&CropSession> {
        match self {
            CropMode::Cropping(session) => Some(session),
            CropMode::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut CropSession> {
        match self {
            CropMode::Cropping(session) => Some(session),
            CropMode::Idle => None,
        }
    }
}

/// Crop tool state: the mode plus the ratio preset, which outlives sessions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CropState {
    pub mode: CropMode,
    pub ratio: CropRatio,
}

impl CropState {
    #[must_use]
    pub fn new(ratio: CropRatio) -> Self {
        Self {
            mode: CropMode::Idle,
            ratio,
        }
    }

    /// Enters cropping with a fresh centered rectangle.
    pub fn begin(&mut self, surface: Size) {
        self.mode = CropMode::Cropping(CropSession::new(initial_rect(surface, self.ratio.value())));
    }

    /// Leaves cropping, discarding rectangle and rotation.
    pub fn cancel(&mut self) {
        self.mode = CropMode::Idle;
    }

    /// Changes the ratio. While cropping, the rectangle is rebuilt and any
    /// handle drag is dropped.
    pub fn set_ratio(&mut self, ratio: CropRatio, surface: Size) {
        self.ratio = ratio;
        if let CropMode::Cropping(session) = &mut self.mode {
            session.rect = initial_rect(surface, ratio.value());
            session.active_handle = None;
        }
    }

    /// Rebuilds the rectangle for a resized surface, keeping rotation.
    pub fn reinitialize(&mut self, surface: Size) {
        let ratio = self.ratio.value();
        if let CropMode::Cropping(session) = &mut self.mode {
            session.rect = initial_rect(surface, ratio);
            session.active_handle = None;
        }
    }

    pub fn set_rotation(&mut self, rotation: RotationDegrees) {
        if let Some(session) = self.mode.session_mut() {
            session.rotation = rotation;
        }
    }

    /// Starts a handle drag if `point` hits one. Returns whether it did.
    pub fn grab_handle(&mut self, point: Point) -> bool {
        let Some(session) = self.mode.session_mut() else {
            return false;
        };
        session.active_handle = hit_test(&session.rect, point);
        session.active_handle.is_some()
    }

    /// Moves the active handle to `point`. Returns whether a handle is active.
    pub fn drag_handle(&mut self, point: Point) -> bool {
        let ratio = self.ratio.value();
        let Some(session) = self.mode.session_mut() else {
            return false;
        };
        let Some(handle) = session.active_handle else {
            return false;
        };
        if let Some(rect) = resize(&session.rect, handle, point, ratio) {
            session.rect = rect;
        }
        true
    }

    pub fn release_handle(&mut self) {
        if let Some(session) = self.mode.session_mut() {
            session.active_handle = None;
        }
    }
}

/// Rectangle of the given ratio filling 90% of the surface's tight axis,
/// centered.
#[must_use]
pub fn initial_rect(surface: Size, ratio: f32) -> Rect {
    let (width, height) = if surface.width / surface.height > ratio {
        let height = surface.height * CROP_PADDING;
        (height * ratio, height)
    } else {
        let width = surface.width * CROP_PADDING;
        (width, width / ratio)
    };
    Rect::new(
        (surface.width - width) / 2.0,
        (surface.height - height) / 2.0,
        width,
        height,
    )
}

/// First handle (tl, tr, bl, br) whose enlarged hit box contains `point`.
#[must_use]
pub fn hit_test(rect: &Rect, point: Point) -> Option<HandlePosition> {
    let reach = CROP_HANDLE_SIZE * CROP_HANDLE_HIT_FACTOR;
    HandlePosition::ALL.into_iter().find(|handle| {
        let anchor = handle.anchor(rect);
        (point.x - anchor.x).abs() <= reach && (point.y - anchor.y).abs() <= reach
    })
}

/// Aspect-locked resize dragging `handle` to `point`.
///
/// The opposite corner stays fixed. Returns `None` when the result would be
/// smaller than the minimum dimension.
#[must_use]
pub fn resize(rect: &Rect, handle: HandlePosition, point: Point, ratio: f32) -> Option<Rect> {
    let right = rect.right();
    let bottom = rect.bottom();

    let (x, width) = if handle.is_left() {
        (point.x, right - point.x)
    } else {
        (rect.x, point.x - rect.x)
    };
    let height = width / ratio;
    let y = if handle.is_top() { bottom - height } else { rect.y };

    (width >= MIN_CROP_DIMENSION && height >= MIN_CROP_DIMENSION)
        .then(|| Rect::new(x, y, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const ID: f32 = 35.0 / 45.0;

    fn surface() -> Size {
        Size::new(800.0, 600.0)
    }

    #[test]
    fn initial_rect_fits_wide_surface_by_height() {
        let rect = initial_rect(surface(), ID);
        assert_abs_diff_eq!(rect.height, 540.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.width, 420.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.x, 190.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.y, 30.0, epsilon = 1e-3);
    }

    #[test]
    fn initial_rect_fits_tall_surface_by_width() {
        let rect = initial_rect(Size::new(400.0, 1000.0), 1.0);
        assert_abs_diff_eq!(rect.width, 360.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.height, 360.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.center().y, 500.0, epsilon = 1e-3);
    }

    #[test]
    fn hit_test_uses_enlarged_radius() {
        let rect = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(hit_test(&rect, Point::new(114.0, 86.0)), Some(HandlePosition::TopLeft));
        assert_eq!(hit_test(&rect, Point::new(300.0, 300.0)), Some(HandlePosition::BottomRight));
        assert_eq!(hit_test(&rect, Point::new(290.0, 110.0)), Some(HandlePosition::TopRight));
        assert_eq!(hit_test(&rect, Point::new(116.0, 100.0)), None);
        assert_eq!(hit_test(&rect, Point::new(200.0, 200.0)), None);
    }

    #[test]
    fn hit_test_prefers_earlier_handles_when_overlapping() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(hit_test(&rect, Point::new(5.0, 5.0)), Some(HandlePosition::TopLeft));
    }

    #[test]
    fn bottom_right_resize_keeps_top_left_fixed() {
        let rect = Rect::new(190.0, 30.0, 420.0, 540.0);
        let resized = resize(&rect, HandlePosition::BottomRight, Point::new(490.0, 0.0), ID).unwrap();
        assert_eq!((resized.x, resized.y), (190.0, 30.0));
        assert_abs_diff_eq!(resized.width, 300.0, epsilon = 1e-3);
        assert_abs_diff_eq!(resized.height, 300.0 / ID, epsilon = 1e-3);
    }

    #[test]
    fn top_left_resize_keeps_bottom_right_fixed() {
        let rect = Rect::new(100.0, 100.0, 200.0, 200.0);
        let resized = resize(&rect, HandlePosition::TopLeft, Point::new(150.0, 999.0), 1.0).unwrap();
        assert_abs_diff_eq!(resized.right(), 300.0);
        assert_abs_diff_eq!(resized.bottom(), 300.0);
        assert_abs_diff_eq!(resized.width, 150.0);
        assert_abs_diff_eq!(resized.height, 150.0);
    }

    #[test]
    fn top_right_and_bottom_left_anchor_opposite_corners() {
        let rect = Rect::new(100.0, 100.0, 200.0, 200.0);
        let tr = resize(&rect, HandlePosition::TopRight, Point::new(350.0, 0.0), 1.0).unwrap();
        assert_eq!((tr.x, tr.bottom()), (100.0, 300.0));
        assert_abs_diff_eq!(tr.width, 250.0);

        let bl = resize(&rect, HandlePosition::BottomLeft, Point::new(50.0, 0.0), 1.0).unwrap();
        assert_eq!((bl.right(), bl.y), (300.0, 100.0));
        assert_abs_diff_eq!(bl.height, 250.0);
    }

    #[test]
    fn resize_below_minimum_is_rejected() {
        let rect = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert!(resize(&rect, HandlePosition::BottomRight, Point::new(149.0, 0.0), 1.0).is_none());
        // Width passes but derived height does not.
        assert!(resize(&rect, HandlePosition::BottomRight, Point::new(155.0, 0.0), 1.2).is_none());
        assert!(resize(&rect, HandlePosition::BottomRight, Point::new(50.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn rejected_drag_leaves_rect_untouched_but_keeps_handle() {
        let mut crop = CropState::new(CropRatio::Square);
        crop.begin(surface());
        let before = crop.mode.session().unwrap().rect;
        assert!(crop.grab_handle(HandlePosition::BottomRight.anchor(&before)));

        assert!(crop.drag_handle(Point::new(before.x + 10.0, 0.0)));
        let session = crop.mode.session().unwrap();
        assert_eq!(session.rect, before);
        assert_eq!(session.active_handle, Some(HandlePosition::BottomRight));
    }

    #[test]
    fn ratio_change_rebuilds_rect_and_drops_drag() {
        let mut crop = CropState::new(CropRatio::IdPhoto);
        crop.begin(surface());
        let rect = crop.mode.session().unwrap().rect;
        crop.grab_handle(Point::new(rect.right(), rect.bottom()));

        crop.set_ratio(CropRatio::Square, surface());
        let session = crop.mode.session().unwrap();
        assert_abs_diff_eq!(session.rect.aspect(), 1.0, epsilon = 1e-5);
        assert_eq!(session.active_handle, None);
    }

    #[test]
    fn ratio_change_while_idle_only_records_preset() {
        let mut crop = CropState::new(CropRatio::IdPhoto);
        crop.set_ratio(CropRatio::Square, surface());
        assert_eq!(crop.ratio, CropRatio::Square);
        assert!(!crop.mode.is_cropping());
    }

    #[test]
    fn rotation_is_ignored_while_idle() {
        let mut crop = CropState::default();
        crop.set_rotation(RotationDegrees::new(5.0));
        assert_eq!(crop.mode, CropMode::Idle);
    }

    #[test]
    fn cancel_discards_session() {
        let mut crop = CropState::default();
        crop.begin(surface());
        crop.set_rotation(RotationDegrees::new(5.0));
        crop.cancel();
        assert!(crop.mode.session().is_none());
        crop.begin(surface());
        assert!(crop.mode.session().unwrap().rotation.is_zero());
    }
}
