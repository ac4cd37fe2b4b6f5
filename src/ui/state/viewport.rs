// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Maps image space to screen space with `screen = image * zoom + pan`.
//! Explicit zoom steps pivot at the image origin; wheel zoom pivots at the
//! cursor so the image point under it stays put.

use super::zoom::{ZoomFactor, ZoomStep};
use crate::config::WHEEL_ZOOM_FACTOR;
use crate::domain::editing::{Point, Rect, Size};

/// Zoom factor plus screen-space offset of the image origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    zoom: ZoomFactor,
    pan: Point,
}

impl Viewport {
    #[must_use]
    pub fn new(zoom: ZoomFactor, pan: Point) -> Self {
        Self { zoom, pan }
    }

    /// Viewport that shows the whole image centered in the surface.
    ///
    /// Returns `None` when either size is empty.
    #[must_use]
    pub fn fitted(surface: Size, image: Size) -> Option<Self> {
        if !surface.is_drawable() || !image.is_drawable() {
            return None;
        }
        let zoom = ZoomFactor::new(
            (surface.width / image.width).min(surface.height / image.height),
        );
        let pan = Point::new(
            (surface.width - image.width * zoom.value()) / 2.0,
            (surface.height - image.height * zoom.value()) / 2.0,
        );
        Some(Self { zoom, pan })
    }

    /// Fits in place. Leaves the viewport untouched for empty sizes.
    pub fn fit(&mut self, surface: Size, image: Size) {
        if let Some(fitted) = Self::fitted(surface, image) {
            *self = fitted;
        }
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    pub fn zoom_in(&mut self, step: ZoomStep) {
        self.zoom = self.zoom.scaled(step.value());
    }

    pub fn zoom_out(&mut self, step: ZoomStep) {
        self.zoom = self.zoom.scaled(1.0 / step.value());
    }

    /// One wheel notch, `zoom_in` for scrolling up.
    pub fn wheel_zoom(&mut self, cursor: Point, zoom_in: bool) {
        let factor = if zoom_in {
            WHEEL_ZOOM_FACTOR
        } else {
            1.0 / WHEEL_ZOOM_FACTOR
        };
        self.zoom_about(cursor, factor);
    }

    /// Scales by `factor` keeping the image point under `cursor` fixed.
    ///
    /// Uses the ratio actually applied after clamping, so the pivot holds at
    /// the zoom bounds too.
    pub fn zoom_about(&mut self, cursor: Point, factor: f32) {
        let old = self.zoom.value();
        let new_zoom = self.zoom.scaled(factor);
        let ratio = new_zoom.value() / old;
        self.pan = Point::new(
            cursor.x - (cursor.x - self.pan.x) * ratio,
            cursor.y - (cursor.y - self.pan.y) * ratio,
        );
        self.zoom = new_zoom;
    }

    #[must_use]
    pub fn image_to_screen(&self, point: Point) -> Point {
        let z = self.zoom.value();
        Point::new(point.x * z + self.pan.x, point.y * z + self.pan.y)
    }

    #[must_use]
    pub fn screen_to_image(&self, point: Point) -> Point {
        let z = self.zoom.value();
        Point::new((point.x - self.pan.x) / z, (point.y - self.pan.y) / z)
    }

    /// Screen-space rectangle covered by an image of the given size.
    #[must_use]
    pub fn image_rect(&self, image: Size) -> Rect {
        let z = self.zoom.value();
        Rect::new(self.pan.x, self.pan.y, image.width * z, image.height * z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_ZOOM, MIN_ZOOM};
    use crate::test_utils::assert_abs_diff_eq;

    fn surface() -> Size {
        Size::new(800.0, 600.0)
    }

    #[test]
    fn fit_centers_portrait_image() {
        let viewport = Viewport::fitted(surface(), Size::new(1000.0, 1200.0)).unwrap();
        assert_abs_diff_eq!(viewport.zoom().value(), 0.5);
        assert_abs_diff_eq!(viewport.pan().x, 150.0);
        assert_abs_diff_eq!(viewport.pan().y, 0.0);
    }

    #[test]
    fn fit_is_idempotent() {
        let image = Size::new(640.0, 480.0);
        let mut viewport = Viewport::default();
        viewport.fit(surface(), image);
        let first = viewport;
        viewport.fit(surface(), image);
        assert_eq!(viewport, first);
    }

    #[test]
    fn fit_ignores_empty_surface() {
        let mut viewport = Viewport::new(ZoomFactor::new(2.0), Point::new(5.0, 5.0));
        viewport.fit(Size::new(0.0, 600.0), Size::new(100.0, 100.0));
        assert_eq!(viewport.zoom().value(), 2.0);
        assert_eq!(viewport.pan(), Point::new(5.0, 5.0));
    }

    #[test]
    fn fit_clamps_tiny_ratio() {
        let viewport = Viewport::fitted(Size::new(10.0, 10.0), Size::new(100_000.0, 100_000.0))
            .unwrap();
        assert_eq!(viewport.zoom().value(), MIN_ZOOM);
    }

    #[test]
    fn zoom_in_out_keep_pan() {
        let mut viewport = Viewport::new(ZoomFactor::new(0.5), Point::new(150.0, 0.0));
        viewport.zoom_in(ZoomStep::default());
        assert_abs_diff_eq!(viewport.zoom().value(), 0.6, epsilon = 1e-6);
        assert_eq!(viewport.pan(), Point::new(150.0, 0.0));
        viewport.zoom_out(ZoomStep::default());
        assert_abs_diff_eq!(viewport.zoom().value(), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn wheel_zoom_keeps_point_under_cursor() {
        let mut viewport = Viewport::new(ZoomFactor::new(0.5), Point::new(150.0, 0.0));
        let cursor = Point::new(420.0, 310.0);
        let image_point = viewport.screen_to_image(cursor);

        viewport.wheel_zoom(cursor, true);
        let after = viewport.image_to_screen(image_point);
        assert_abs_diff_eq!(after.x, cursor.x, epsilon = 1e-3);
        assert_abs_diff_eq!(after.y, cursor.y, epsilon = 1e-3);
        assert_abs_diff_eq!(viewport.zoom().value(), 0.55, epsilon = 1e-6);

        viewport.wheel_zoom(cursor, false);
        let after = viewport.image_to_screen(image_point);
        assert_abs_diff_eq!(after.x, cursor.x, epsilon = 1e-3);
        assert_abs_diff_eq!(after.y, cursor.y, epsilon = 1e-3);
    }

    #[test]
    fn wheel_zoom_pivot_holds_at_max_zoom() {
        let mut viewport = Viewport::new(ZoomFactor::new(MAX_ZOOM), Point::new(-10.0, 20.0));
        let cursor = Point::new(100.0, 100.0);
        let image_point = viewport.screen_to_image(cursor);

        viewport.wheel_zoom(cursor, true);
        assert_eq!(viewport.zoom().value(), MAX_ZOOM);
        let after = viewport.image_to_screen(image_point);
        assert_abs_diff_eq!(after.x, cursor.x, epsilon = 1e-3);
        assert_abs_diff_eq!(after.y, cursor.y, epsilon = 1e-3);
    }

    #[test]
    fn image_rect_scales_image() {
        let viewport = Viewport::new(ZoomFactor::new(0.5), Point::new(150.0, 0.0));
        let rect = viewport.image_rect(Size::new(1000.0, 1200.0));
        assert_eq!(rect, Rect::new(150.0, 0.0, 500.0, 600.0));
    }
}
