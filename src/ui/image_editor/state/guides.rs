// SPDX-License-Identifier: MPL-2.0
//! Placement guides drawn inside the crop rectangle.
//!
//! Crop guides are three horizontal bands at fixed fractions of the crop
//! height plus a vertical center line. Biometric guides are two lines derived
//! from the 45 mm photo standard. Both are purely visual.

use crate::config::{HEAD_HEIGHT_MM, HEAD_TOP_MARGIN_MM, PHOTO_HEIGHT_MM};
use crate::domain::editing::Rect;

/// What a crop guide band marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideZone {
    HeadTop,
    Eyes,
    Chin,
}

impl GuideZone {
    pub const ALL: [GuideZone; 3] = [GuideZone::HeadTop, GuideZone::Eyes, GuideZone::Chin];

    /// Start and end as fractions of the crop height.
    #[must_use]
    pub fn span(self) -> (f32, f32) {
        match self {
            GuideZone::HeadTop => (0.10, 0.20),
            GuideZone::Eyes => (0.35, 0.50),
            GuideZone::Chin => (0.80, 0.90),
        }
    }

    /// Straight RGBA fill of the band, 0.15 alpha.
    #[must_use]
    pub fn fill_rgba(self) -> [u8; 4] {
        match self {
            GuideZone::HeadTop => [0, 255, 255, 38],
            GuideZone::Eyes => [0, 255, 0, 38],
            GuideZone::Chin => [255, 255, 0, 38],
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            GuideZone::HeadTop => "guide-head-top",
            GuideZone::Eyes => "guide-eyes",
            GuideZone::Chin => "guide-chin",
        }
    }
}

/// Which guide overlays are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideToggles {
    pub crop_guides: bool,
    pub biometric_guides: bool,
}

impl Default for GuideToggles {
    fn default() -> Self {
        Self {
            crop_guides: true,
            biometric_guides: false,
        }
    }
}

/// Screen-space band for one zone.
#[must_use]
pub fn band_rect(crop: &Rect, zone: GuideZone) -> Rect {
    let (start, end) = zone.span();
    let top = crop.y + crop.height * start;
    let bottom = crop.y + crop.height * end;
    Rect::new(crop.x, top, crop.width, bottom - top)
}

/// X coordinate of the vertical center line.
#[must_use]
pub fn center_line_x(crop: &Rect) -> f32 {
    crop.x + crop.width / 2.0
}

/// Screen-space y of the biometric lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiometricLines {
    pub top_of_hair: f32,
    pub chin: f32,
}

#[must_use]
pub fn biometric_lines(crop: &Rect) -> BiometricLines {
    let top_of_hair = crop.y + HEAD_TOP_MARGIN_MM / PHOTO_HEIGHT_MM * crop.height;
    let chin = top_of_hair + HEAD_HEIGHT_MM / PHOTO_HEIGHT_MM * crop.height;
    BiometricLines { top_of_hair, chin }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn bands_scale_with_crop_height() {
        let crop = Rect::new(10.0, 100.0, 350.0, 450.0);
        let eyes = band_rect(&crop, GuideZone::Eyes);
        assert_abs_diff_eq!(eyes.y, 100.0 + 157.5, epsilon = 1e-3);
        assert_abs_diff_eq!(eyes.height, 67.5, epsilon = 1e-3);
        assert_eq!(eyes.x, crop.x);
        assert_eq!(eyes.width, crop.width);
    }

    #[test]
    fn bands_do_not_overlap_and_stay_inside() {
        let crop = Rect::new(0.0, 0.0, 100.0, 1000.0);
        let mut last_bottom = crop.y;
        for zone in GuideZone::ALL {
            let band = band_rect(&crop, zone);
            assert!(band.y >= last_bottom);
            assert!(band.bottom() <= crop.bottom());
            last_bottom = band.bottom();
        }
    }

    #[test]
    fn biometric_lines_follow_45mm_standard() {
        let crop = Rect::new(0.0, 20.0, 350.0, 450.0);
        let lines = biometric_lines(&crop);
        // 10 px per mm.
        assert_abs_diff_eq!(lines.top_of_hair, 20.0 + 30.0, epsilon = 1e-3);
        assert_abs_diff_eq!(lines.chin, 50.0 + 345.0, epsilon = 1e-3);
    }

    #[test]
    fn center_line_splits_crop() {
        assert_eq!(center_line_x(&Rect::new(100.0, 0.0, 50.0, 80.0)), 125.0);
    }

    #[test]
    fn default_toggles_show_only_crop_guides() {
        let toggles = GuideToggles::default();
        assert!(toggles.crop_guides);
        assert!(!toggles.biometric_guides);
    }
}
