// SPDX-License-Identifier: MPL-2.0
//! JSON bodies of the `generateContent` endpoint.
//!
//! Only the fields this client reads or writes are modelled; everything else
//! in a response is ignored.

use crate::application::port::{AIError, FaceLandmarks};
use crate::domain::media::{EncodedImage, ImageMime};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub generation_config: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

fn image_and_text(image: &EncodedImage, prompt: &str) -> Vec<Content> {
    vec![Content {
        parts: vec![
            Part {
                inline_data: Some(InlineData {
                    mime_type: image.mime.as_str().to_string(),
                    data: STANDARD.encode(&image.bytes),
                }),
                text: None,
            },
            Part {
                inline_data: None,
                text: Some(prompt.to_string()),
            },
        ],
    }]
}

/// Body asking the image model for an edited photo.
#[must_use]
pub fn retouch_request(image: &EncodedImage, prompt: &str) -> GenerateRequest {
    GenerateRequest {
        contents: image_and_text(image, prompt),
        generation_config: json!({ "responseModalities": ["IMAGE"] }),
    }
}

/// Body asking the text model for landmark JSON.
#[must_use]
pub fn landmark_request(image: &EncodedImage, prompt: &str) -> GenerateRequest {
    let point = json!({
        "type": "OBJECT",
        "properties": {
            "x": { "type": "NUMBER" },
            "y": { "type": "NUMBER" }
        }
    });
    GenerateRequest {
        contents: image_and_text(image, prompt),
        generation_config: json!({
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "topOfHead": point,
                    "chin": point
                }
            }
        }),
    }
}

fn parse_response(body: &str) -> Result<GenerateResponse, AIError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| AIError::InvalidPayload(e.to_string()))?;
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone())
    {
        return Err(AIError::Blocked { reason });
    }
    Ok(response)
}

fn first_parts(response: &GenerateResponse) -> &[Part] {
    response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map_or(&[], |content| content.parts.as_slice())
}

/// Extracts the first inline image of the first candidate.
///
/// An unrecognised mime type falls back to `fallback`.
pub fn parse_image_response(body: &str, fallback: ImageMime) -> Result<EncodedImage, AIError> {
    let response = parse_response(body)?;
    let inline = first_parts(&response)
        .iter()
        .find_map(|part| part.inline_data.as_ref())
        .ok_or(AIError::EmptyResponse)?;
    let bytes = STANDARD
        .decode(inline.data.as_bytes())
        .map_err(|e| AIError::InvalidPayload(e.to_string()))?;
    let mime = ImageMime::sniff(&bytes)
        .or_else(|| ImageMime::from_mime_str(&inline.mime_type))
        .unwrap_or(fallback);
    Ok(EncodedImage { bytes, mime })
}

/// Parses landmark JSON carried in the first text part.
pub fn parse_landmark_response(body: &str) -> Result<FaceLandmarks, AIError> {
    let response = parse_response(body)?;
    let text = first_parts(&response)
        .iter()
        .find_map(|part| part.text.as_deref())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or(AIError::EmptyResponse)?;
    serde_json::from_str(text).map_err(|e| AIError::InvalidPayload(e.to_string()))
}

/// Builds the error for a non-success status, preferring the service's
/// own message when the body carries one.
#[must_use]
pub fn http_error(status: u16, body: &str) -> AIError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| match envelope.error.status {
            Some(code) if !envelope.error.message.is_empty() => {
                format!("{code}: {}", envelope.error.message)
            }
            Some(code) => code,
            None => envelope.error.message,
        })
        .unwrap_or_else(|_| body.chars().take(200).collect());
    AIError::Http { status, message }
}
