// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds and step factors
//! - **Crop**: Handle geometry, minimum size, rotation range
//! - **Filters**: Brightness/contrast/saturation percentages
//! - **Photo standard**: Physical photo dimensions and head placement
//! - **Sheet**: Print sheet layout
//! - **AI**: Retouch service defaults

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Smallest zoom factor the viewport accepts (1%).
pub const MIN_ZOOM: f32 = 0.01;

/// Largest zoom factor the viewport accepts (4000%).
pub const MAX_ZOOM: f32 = 40.0;

/// Multiplier applied by the zoom in/out buttons.
pub const DEFAULT_ZOOM_STEP: f32 = 1.2;

/// Minimum allowed zoom step multiplier.
pub const MIN_ZOOM_STEP: f32 = 1.01;

/// Maximum allowed zoom step multiplier.
pub const MAX_ZOOM_STEP: f32 = 4.0;

/// Multiplier applied per mouse-wheel notch.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;

// ==========================================================================
// Crop Defaults
// ==========================================================================

/// Visual size of a crop corner handle, in screen pixels.
pub const CROP_HANDLE_SIZE: f32 = 10.0;

/// Hit radius multiplier applied to the handle size.
pub const CROP_HANDLE_HIT_FACTOR: f32 = 1.5;

/// Minimum crop rectangle width and height, in screen pixels.
pub const MIN_CROP_DIMENSION: f32 = 50.0;

/// Fraction of the surface a fresh crop rectangle fills along its tight axis.
pub const CROP_PADDING: f32 = 0.9;

/// Rotation range in degrees (symmetric).
pub const MIN_ROTATION_DEGREES: f32 = -10.0;
pub const MAX_ROTATION_DEGREES: f32 = 10.0;

/// Rotation slider step in degrees.
pub const ROTATION_STEP_DEGREES: f32 = 0.1;

/// Largest output side produced by crop apply, in pixels.
pub const MAX_OUTPUT_DIMENSION: u32 = 16_384;

// ==========================================================================
// Filter Defaults
// ==========================================================================

pub const MIN_FILTER_PERCENT: f32 = 0.0;
pub const MAX_FILTER_PERCENT: f32 = 200.0;
pub const DEFAULT_FILTER_PERCENT: f32 = 100.0;

// ==========================================================================
// Photo Standard Defaults
// ==========================================================================

/// Printed photo width in millimeters.
pub const PHOTO_WIDTH_MM: f32 = 35.0;

/// Printed photo height in millimeters.
pub const PHOTO_HEIGHT_MM: f32 = 45.0;

/// Distance from the photo top edge to the top of the hair.
pub const HEAD_TOP_MARGIN_MM: f32 = 3.0;

/// Top of hair to chin.
pub const HEAD_HEIGHT_MM: f32 = 34.5;

// ==========================================================================
// Sheet Defaults
// ==========================================================================

/// Print resolution of the photo sheet.
pub const SHEET_DPI: f32 = 300.0;

/// Horizontal gap between sheet cells in millimeters.
pub const SHEET_GAP_MM: f32 = 5.0;

/// Outer margin around the sheet cells in millimeters.
pub const SHEET_MARGIN_MM: f32 = 10.0;

/// Default number of copies on a sheet.
pub const DEFAULT_SHEET_COPIES: u8 = 8;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Advisory upload size limit. Larger files load with a warning.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

// ==========================================================================
// AI Defaults
// ==========================================================================

pub const DEFAULT_AI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Request timeout for AI calls, in seconds.
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 120;
pub const MIN_AI_TIMEOUT_SECS: u64 = 5;
pub const MAX_AI_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM > 0.0);
    assert!(MAX_ZOOM > MIN_ZOOM);
    assert!(MIN_ZOOM_STEP > 1.0);
    assert!(MAX_ZOOM_STEP > MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);
    assert!(WHEEL_ZOOM_FACTOR > 1.0);

    // Crop validation
    assert!(CROP_HANDLE_SIZE > 0.0);
    assert!(CROP_HANDLE_HIT_FACTOR >= 1.0);
    assert!(MIN_CROP_DIMENSION > 0.0);
    assert!(CROP_PADDING > 0.0 && CROP_PADDING <= 1.0);
    assert!(MIN_ROTATION_DEGREES < 0.0);
    assert!(MAX_ROTATION_DEGREES > 0.0);

    // Filter validation
    assert!(MIN_FILTER_PERCENT < DEFAULT_FILTER_PERCENT);
    assert!(MAX_FILTER_PERCENT > DEFAULT_FILTER_PERCENT);

    // Photo standard validation
    assert!(HEAD_TOP_MARGIN_MM + HEAD_HEIGHT_MM < PHOTO_HEIGHT_MM);

    // AI validation
    assert!(MIN_AI_TIMEOUT_SECS > 0);
    assert!(DEFAULT_AI_TIMEOUT_SECS >= MIN_AI_TIMEOUT_SECS);
    assert!(DEFAULT_AI_TIMEOUT_SECS <= MAX_AI_TIMEOUT_SECS);
};
