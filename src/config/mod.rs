// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[editor]` - Zoom step, default crop ratio, guide visibility
//! - `[sheet]` - Print sheet copy count
//! - `[ai]` - Retouch intensity, model names, endpoint and timeout
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ID_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use id_lens::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::port::ai::AiIntensity;
use crate::domain::editing::{CropRatio, SheetCopies};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Editor canvas settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Multiplier used by the zoom in/out buttons.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Aspect ratio selected when the crop tool first opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_ratio: Option<CropRatio>,

    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub show_crop_guides: Option<bool>,

    #[serde(default = "default_false", skip_serializing_if = "Option::is_none")]
    pub show_biometric_guides: Option<bool>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            default_ratio: Some(CropRatio::default()),
            show_crop_guides: default_true(),
            show_biometric_guides: default_false(),
        }
    }
}

/// Print sheet settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetConfig {
    #[serde(default = "default_copies", skip_serializing_if = "Option::is_none")]
    pub copies: Option<SheetCopies>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            copies: default_copies(),
        }
    }
}

/// AI retouch service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<AiIntensity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Model used for image retouching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_model: Option<String>,

    /// Model used for landmark detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_model: Option<String>,

    #[serde(
        default = "default_ai_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            intensity: Some(AiIntensity::default()),
            endpoint: None,
            image_model: None,
            text_model: None,
            timeout_secs: default_ai_timeout_secs(),
        }
    }
}

impl AiConfig {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_AI_ENDPOINT)
    }

    #[must_use]
    pub fn image_model(&self) -> &str {
        self.image_model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    #[must_use]
    pub fn text_model(&self) -> &str {
        self.text_model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_AI_TIMEOUT_SECS)
            .clamp(MIN_AI_TIMEOUT_SECS, MAX_AI_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub sheet: SheetConfig,

    #[serde(default)]
    pub ai: AiConfig,
}

impl Config {
    /// Zoom button multiplier, clamped to the supported range.
    #[must_use]
    pub fn zoom_step(&self) -> f32 {
        match self.editor.zoom_step {
            Some(step) if step.is_finite() => step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP),
            _ => DEFAULT_ZOOM_STEP,
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP)
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_false() -> Option<bool> {
    Some(false)
}

fn default_copies() -> Option<SheetCopies> {
    Some(SheetCopies::default())
}

fn default_ai_timeout_secs() -> Option<u64> {
    Some(DEFAULT_AI_TIMEOUT_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
