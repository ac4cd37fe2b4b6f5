// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`ai`]: Generative retouch and face-landmark detection
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Methods return `Send` futures so callers can run them in `Task::perform`

pub mod ai;

pub use ai::{AIError, AiIntensity, FaceLandmarks, LandmarkPort, RetouchPort, RetouchRequest};
