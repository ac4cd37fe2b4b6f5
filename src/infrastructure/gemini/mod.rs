// SPDX-License-Identifier: MPL-2.0
//! Gemini adapter for the AI ports.
//!
//! Talks to the `generateContent` REST endpoint over `reqwest`. The API key
//! is read from `GEMINI_API_KEY`, falling back to `API_KEY`.

pub mod prompts;
pub mod wire;

use crate::application::port::{
    AIError, FaceLandmarks, LandmarkPort, RetouchPort, RetouchRequest,
};
use crate::config::AiConfig;
use crate::domain::media::EncodedImage;
use std::time::Duration;
use wire::GenerateRequest;

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

const USER_AGENT: &str = concat!("IdLens/", env!("CARGO_PKG_VERSION"));

/// Returns the first non-empty API key found in the environment.
#[must_use]
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// HTTP client for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    image_model: String,
    text_model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Builds a client from settings and the environment.
    ///
    /// A missing key is not an error here; calls fail with
    /// [`AIError::MissingCredential`] instead.
    pub fn from_config(config: &AiConfig) -> Result<Self, AIError> {
        Self::new(
            config.endpoint(),
            config.image_model(),
            config.text_model(),
            config.timeout(),
            api_key_from_env(),
        )
    }

    pub fn new(
        endpoint: &str,
        image_model: &str,
        text_model: &str,
        timeout: Duration,
        api_key: Option<String>,
    ) -> Result<Self, AIError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| AIError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            image_model: image_model.to_string(),
            text_model: text_model.to_string(),
            api_key,
        })
    }

    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.endpoint)
    }

    async fn generate(&self, model: &str, body: &GenerateRequest) -> Result<String, AIError> {
        let key = self.api_key.as_deref().ok_or(AIError::MissingCredential)?;
        let url = self.url(model);
        tracing::debug!(%url, "sending generateContent request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", key)
            .json(body)
            .send()
            .await
            .map_err(|e| AIError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AIError::Network(e.to_string()))?;

        if !status.is_success() {
            let error = wire::http_error(status.as_u16(), &text);
            tracing::warn!(status = status.as_u16(), "AI request failed: {error}");
            return Err(error);
        }
        Ok(text)
    }
}

impl RetouchPort for GeminiClient {
    async fn retouch(&self, request: RetouchRequest) -> Result<EncodedImage, AIError> {
        let prompt = prompts::retouch(request.intensity);
        let body = wire::retouch_request(&request.image, &prompt);
        let text = self.generate(&self.image_model, &body).await?;
        let image = wire::parse_image_response(&text, request.image.mime)?;
        tracing::info!(
            intensity = request.intensity.as_str(),
            size = image.bytes.len(),
            "AI retouch received"
        );
        Ok(image)
    }
}

impl LandmarkPort for GeminiClient {
    async fn detect_landmarks(&self, image: EncodedImage) -> Result<FaceLandmarks, AIError> {
        let body = wire::landmark_request(&image, prompts::LANDMARKS);
        let text = self.generate(&self.text_model, &body).await?;
        wire::parse_landmark_response(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::AiIntensity;
    use crate::domain::media::ImageMime;

    fn client(api_key: Option<&str>) -> GeminiClient {
        GeminiClient::new(
            "https://example.invalid/v1beta/",
            "image-model",
            "text-model",
            Duration::from_secs(5),
            api_key.map(str::to_string),
        )
        .expect("client builds")
    }

    #[test]
    fn url_joins_endpoint_and_model() {
        assert_eq!(
            client(None).url("image-model"),
            "https://example.invalid/v1beta/models/image-model:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_request() {
        let client = client(None);
        assert!(!client.has_credential());
        let request = RetouchRequest {
            image: EncodedImage {
                bytes: vec![0xFF, 0xD8, 0xFF],
                mime: ImageMime::Jpeg,
            },
            intensity: AiIntensity::Medium,
        };
        assert_eq!(
            client.retouch(request).await,
            Err(AIError::MissingCredential)
        );
    }

    #[test]
    fn from_config_uses_configured_models() {
        let config = AiConfig {
            image_model: Some("custom-image".to_string()),
            ..AiConfig::default()
        };
        let client = GeminiClient::from_config(&config).expect("client builds");
        assert_eq!(client.image_model, "custom-image");
        assert_eq!(client.text_model, config.text_model());
    }
}
