// SPDX-License-Identifier: MPL-2.0
//! AI collaborator port definitions.
//!
//! This module defines the [`RetouchPort`] and [`LandmarkPort`] traits for
//! remote, generative-model based photo operations.
//!
//! # Design Notes
//!
//! - Requests and responses carry encoded bytes, never decoded pixels
//! - Futures are `Send` so callers can hand them to `Task::perform`
//! - Every failure maps to an [`AIError`] with a human-readable message

use crate::domain::media::EncodedImage;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

// =============================================================================
// AIError
// =============================================================================

/// Errors that can occur during AI processing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AIError {
    /// No API key was found in the environment.
    #[error("no API key configured for the AI service")]
    MissingCredential,

    /// The request could not be sent or the connection failed.
    #[error("AI service unreachable: {0}")]
    Network(String),

    /// The service answered with a non-success HTTP status.
    #[error("AI service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The service refused the request on policy grounds.
    #[error("request blocked by the AI service: {reason}")]
    Blocked { reason: String },

    /// The service answered without an image (or landmark) payload.
    #[error("the AI service returned no result")]
    EmptyResponse,

    /// The payload could not be decoded.
    #[error("invalid AI response: {0}")]
    InvalidPayload(String),
}

impl AIError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AIError::MissingCredential => "error-ai-missing-credential",
            AIError::Network(_) => "error-ai-network",
            AIError::Http { .. } => "error-ai-http",
            AIError::Blocked { .. } => "error-ai-blocked",
            AIError::EmptyResponse => "error-ai-empty-response",
            AIError::InvalidPayload(_) => "error-ai-invalid-payload",
        }
    }
}

// =============================================================================
// Requests and Responses
// =============================================================================

/// Retouch strength requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiIntensity {
    Light,
    #[default]
    Medium,
    Strong,
}

impl AiIntensity {
    pub const ALL: [AiIntensity; 3] = [AiIntensity::Light, AiIntensity::Medium, AiIntensity::Strong];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AiIntensity::Light => "light",
            AiIntensity::Medium => "medium",
            AiIntensity::Strong => "strong",
        }
    }
}

/// Retouch request: the unfiltered current image plus a strength.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetouchRequest {
    pub image: EncodedImage,
    pub intensity: AiIntensity,
}

/// A pixel position in the submitted image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
}

/// Head landmarks used to place biometric guides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceLandmarks {
    pub top_of_head: LandmarkPoint,
    pub chin: LandmarkPoint,
}

impl FaceLandmarks {
    /// Vertical distance from the top of the head to the chin.
    #[must_use]
    pub fn head_height(&self) -> f32 {
        (self.chin.y - self.top_of_head.y).abs()
    }
}

// =============================================================================
// Ports
// =============================================================================

/// Port for generative photo retouching.
///
/// The returned image is expected to keep the pixel dimensions of the
/// request; callers tolerate a mismatch.
pub trait RetouchPort: Send + Sync {
    fn retouch(
        &self,
        request: RetouchRequest,
    ) -> impl Future<Output = Result<EncodedImage, AIError>> + Send;
}

/// Port for locating the top of the head and the chin in a portrait.
pub trait LandmarkPort: Send + Sync {
    fn detect_landmarks(
        &self,
        image: EncodedImage,
    ) -> impl Future<Output = Result<FaceLandmarks, AIError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::ImageMime;

    #[test]
    fn ai_error_display() {
        let err = AIError::Blocked {
            reason: "SAFETY".to_string(),
        };
        assert!(format!("{err}").contains("SAFETY"));

        let err = AIError::Http {
            status: 429,
            message: "quota".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("429"));
        assert!(display.contains("quota"));
    }

    #[test]
    fn intensity_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            intensity: AiIntensity,
        }
        let text = toml::to_string(&Wrapper {
            intensity: AiIntensity::Strong,
        })
        .expect("serialize");
        assert!(text.contains("\"strong\""));
        let parsed: Wrapper = toml::from_str("intensity = \"light\"").expect("parse");
        assert_eq!(parsed.intensity, AiIntensity::Light);
    }

    #[test]
    fn landmarks_parse_from_camel_case_json() {
        let json = r#"{"topOfHead":{"x":120.0,"y":40.0},"chin":{"x":118.0,"y":400.0}}"#;
        let landmarks: FaceLandmarks = serde_json::from_str(json).expect("parse");
        assert_eq!(landmarks.top_of_head.y, 40.0);
        assert_eq!(landmarks.head_height(), 360.0);
    }

    // Mock implementation for testing
    struct MockRetoucher {
        fail: bool,
    }

    impl RetouchPort for MockRetoucher {
        async fn retouch(&self, request: RetouchRequest) -> Result<EncodedImage, AIError> {
            if self.fail {
                return Err(AIError::EmptyResponse);
            }
            Ok(request.image)
        }
    }

    #[tokio::test]
    async fn mock_retoucher_round_trips_image() {
        let image = EncodedImage {
            bytes: vec![1, 2, 3],
            mime: ImageMime::Png,
        };
        let request = RetouchRequest {
            image: image.clone(),
            intensity: AiIntensity::default(),
        };
        let result = MockRetoucher { fail: false }.retouch(request.clone()).await;
        assert_eq!(result, Ok(image));

        let result = MockRetoucher { fail: true }.retouch(request).await;
        assert_eq!(result, Err(AIError::EmptyResponse));
    }
}
