// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`upload`] - Pick or drop a portrait
//! - [`image_editor`] - Crop, filters, AI retouch and export
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable viewport, zoom and drag state
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Palette, spacing, sizing and type scale
//! - [`notifications`] - Toasts for feedback outside the editor

pub mod design_tokens;
pub mod image_editor;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod upload;
