// SPDX-License-Identifier: MPL-2.0
//! Zoom value objects
//!
//! - [`ZoomFactor`]: the image-to-screen scale, bounded to 1%–4000%
//! - [`ZoomStep`]: multiplier used by the zoom in/out buttons

use crate::config::{DEFAULT_ZOOM_STEP, MAX_ZOOM, MAX_ZOOM_STEP, MIN_ZOOM, MIN_ZOOM_STEP};

/// Image-to-screen scale, guaranteed to be within valid range.
///
/// This type ensures that zoom values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    ///
    /// Non-finite input collapses to 1.0.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if !factor.is_finite() {
            return Self::default();
        }
        Self(factor.clamp(MIN_ZOOM, MAX_ZOOM))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a percentage (1.0 → 100%).
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Multiplies the zoom, clamping the result.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.0 * factor)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Zoom button multiplier, guaranteed to be within valid range (×1.01–×4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    #[must_use]
    pub fn new(step: f32) -> Self {
        if !step.is_finite() {
            return Self::default();
        }
        Self(step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP)
    }
}
