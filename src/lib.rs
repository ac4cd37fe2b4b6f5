// SPDX-License-Identifier: MPL-2.0
//! `id_lens` prepares identity and visa photos with the Iced GUI framework.
//!
//! A photo is cropped to a regulated aspect ratio under biometric guides,
//! adjusted, optionally retouched by an AI service, and exported either as a
//! single JPEG or as a printable sheet of copies.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
