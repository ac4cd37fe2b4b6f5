// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! This module provides type-safe wrappers for editing values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_FILTER_PERCENT, DEFAULT_SHEET_COPIES, MAX_FILTER_PERCENT, MAX_ROTATION_DEGREES,
    MIN_FILTER_PERCENT, MIN_ROTATION_DEGREES, PHOTO_HEIGHT_MM, PHOTO_WIDTH_MM,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// FilterPercent
// =============================================================================

/// Filter strength percentage, guaranteed to be within valid range (0%–200%).
///
/// 100% leaves the channel untouched. The value is stored as given (clamped),
/// so slider positions round-trip exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterPercent(f32);

impl FilterPercent {
    /// Creates a new filter percentage, clamping to the valid range.
    ///
    /// NaN collapses to the neutral value.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(MIN_FILTER_PERCENT, MAX_FILTER_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the percentage as a multiplier (100% → 1.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }

    /// Returns whether this represents no change.
    #[must_use]
    pub fn is_neutral(self) -> bool {
        (self.0 - DEFAULT_FILTER_PERCENT).abs() < f32::EPSILON
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_FILTER_PERCENT
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_FILTER_PERCENT
    }
}

impl Default for FilterPercent {
    fn default() -> Self {
        Self(DEFAULT_FILTER_PERCENT)
    }
}

// =============================================================================
// ImageFilters
// =============================================================================

/// The three color filters applied on top of the current image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageFilters {
    pub brightness: FilterPercent,
    pub contrast: FilterPercent,
    pub saturate: FilterPercent,
}

impl ImageFilters {
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.brightness.is_neutral() && self.contrast.is_neutral() && self.saturate.is_neutral()
    }
}

/// Identifies one of the three filters, used by slider messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Brightness,
    Contrast,
    Saturate,
}

impl ImageFilters {
    #[must_use]
    pub fn get(&self, kind: FilterKind) -> FilterPercent {
        match kind {
            FilterKind::Brightness => self.brightness,
            FilterKind::Contrast => self.contrast,
            FilterKind::Saturate => self.saturate,
        }
    }

    pub fn set(&mut self, kind: FilterKind, value: FilterPercent) {
        match kind {
            FilterKind::Brightness => self.brightness = value,
            FilterKind::Contrast => self.contrast = value,
            FilterKind::Saturate => self.saturate = value,
        }
    }
}

// =============================================================================
// RotationDegrees
// =============================================================================

/// Free rotation applied while cropping, clamped to ±10°.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationDegrees(f32);

impl RotationDegrees {
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        if degrees.is_nan() {
            return Self::default();
        }
        Self(degrees.clamp(MIN_ROTATION_DEGREES, MAX_ROTATION_DEGREES))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.abs() < f32::EPSILON
    }
}

// =============================================================================
// CropRatio
// =============================================================================

/// Aspect-ratio presets offered by the crop tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CropRatio {
    /// 35 × 45 mm identity photo.
    #[default]
    IdPhoto,
    Square,
}

impl CropRatio {
    pub const ALL: [CropRatio; 2] = [CropRatio::IdPhoto, CropRatio::Square];

    /// Width divided by height.
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            CropRatio::IdPhoto => PHOTO_WIDTH_MM / PHOTO_HEIGHT_MM,
            CropRatio::Square => 1.0,
        }
    }
}

// =============================================================================
// SheetCopies
// =============================================================================

/// Number of photo copies on a print sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SheetCopies {
    Four,
    #[default]
    Eight,
}

impl SheetCopies {
    pub const ALL: [SheetCopies; 2] = [SheetCopies::Four, SheetCopies::Eight];

    #[must_use]
    pub fn count(self) -> u32 {
        match self {
            SheetCopies::Four => 4,
            SheetCopies::Eight => 8,
        }
    }
}

impl TryFrom<u8> for SheetCopies {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(SheetCopies::Four),
            8 => Ok(SheetCopies::Eight),
            other => Err(format!("sheet copies must be 4 or 8, got {other}")),
        }
    }
}

impl From<SheetCopies> for u8 {
    fn from(copies: SheetCopies) -> Self {
        match copies {
            SheetCopies::Four => 4,
            SheetCopies::Eight => 8,
        }
    }
}

const _: () = assert!(DEFAULT_SHEET_COPIES == 8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn filter_percent_clamps_to_range() {
        assert_eq!(FilterPercent::new(-20.0).value(), 0.0);
        assert_eq!(FilterPercent::new(250.0).value(), 200.0);
        assert_eq!(FilterPercent::new(135.0).value(), 135.0);
        assert!(FilterPercent::new(0.0).is_min());
        assert!(FilterPercent::new(200.0).is_max());
    }

    #[test]
    fn filter_percent_nan_is_neutral() {
        assert!(FilterPercent::new(f32::NAN).is_neutral());
    }

    #[test]
    fn default_filters_are_neutral() {
        let filters = ImageFilters::default();
        assert!(filters.is_neutral());
        assert_eq!(filters.brightness.value(), 100.0);
    }

    #[test]
    fn filters_set_and_get_by_kind() {
        let mut filters = ImageFilters::default();
        filters.set(FilterKind::Contrast, FilterPercent::new(150.0));
        assert_eq!(filters.get(FilterKind::Contrast).value(), 150.0);
        assert!(!filters.is_neutral());
    }

    #[test]
    fn rotation_clamps_to_ten_degrees() {
        assert_eq!(RotationDegrees::new(15.0).value(), 10.0);
        assert_eq!(RotationDegrees::new(-12.5).value(), -10.0);
        assert!(RotationDegrees::default().is_zero());
    }

    #[test]
    fn id_ratio_is_35_over_45() {
        assert_abs_diff_eq!(CropRatio::IdPhoto.value(), 35.0 / 45.0, epsilon = 1e-6);
        assert_eq!(CropRatio::Square.value(), 1.0);
    }

    #[test]
    fn sheet_copies_accepts_only_four_or_eight() {
        assert_eq!(SheetCopies::try_from(4), Ok(SheetCopies::Four));
        assert_eq!(SheetCopies::try_from(8), Ok(SheetCopies::Eight));
        assert!(SheetCopies::try_from(6).is_err());
        assert_eq!(SheetCopies::default().count(), 8);
    }
}
