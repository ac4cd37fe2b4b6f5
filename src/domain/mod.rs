// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects and business rules for photo editing.
//!
//! Depends only on `std`, `serde` derives and the constants in
//! [`config::defaults`](crate::config::defaults), so everything here is
//! testable without a window or network.
//!
//! # Modules
//!
//! - [`editing`]: Filters, rotation, crop ratios, sheet layout counts and geometry
//! - [`media`]: Encoded image formats ([`ImageMime`](media::ImageMime))

pub mod editing;
pub mod media;
