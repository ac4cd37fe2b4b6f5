// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for photo editing operations:
//! - [`FilterPercent`] / [`ImageFilters`]: Brightness, contrast and saturation
//! - [`RotationDegrees`]: Free rotation applied while cropping
//! - [`CropRatio`]: Aspect-ratio presets
//! - [`SheetCopies`]: Photo count on a print sheet
//! - [`Point`], [`Size`], [`Rect`]: Screen and image-space geometry

pub mod geometry;
pub mod newtypes;

pub use geometry::{Point, Rect, Size};
pub use newtypes::{
    CropRatio, FilterKind, FilterPercent, ImageFilters, RotationDegrees, SheetCopies,
};
