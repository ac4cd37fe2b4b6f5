// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Generative retouch and landmark detection over HTTP
//!   (implements [`RetouchPort`] and [`LandmarkPort`])
//!
//! [`RetouchPort`]: crate::application::port::RetouchPort
//! [`LandmarkPort`]: crate::application::port::LandmarkPort

pub mod gemini;

pub use gemini::GeminiClient;
