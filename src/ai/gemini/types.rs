//! Gemini payload types for `generateContent` requests and responses.

use serde::{Deserialize, Deserializer, Serialize};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parts: Vec<Part>,
}

/// One content part.
///
/// Text and inline data are decoded independently, so a part carrying both
/// keeps both. Fields of other part kinds (function calls, thoughts) are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }
}

/// Base64 inline payload, as returned for generated images.
///
/// A missing MIME type decodes as empty and is never treated as an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub mime_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: String,
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body for a story-with-illustrations generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
}

/// `generateContent` response.
///
/// Candidates are normally top-level, but some gateways wrap them in a
/// `response` envelope. Both locations are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub response: Option<ResponseEnvelope>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Content,
}

impl GenerateContentResponse {
    /// Top-level candidates when present, otherwise the enveloped ones.
    pub fn candidates(&self) -> &[Candidate] {
        if !self.candidates.is_empty() {
            return &self.candidates;
        }
        self.response
            .as_ref()
            .map(|envelope| envelope.candidates.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_serializes_modalities_and_role() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text("hello")],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }],
                "generationConfig": { "responseModalities": ["TEXT", "IMAGE"] }
            })
        );
    }

    #[test]
    fn test_parts_decode_text_and_inline_data_independently() {
        let parts: Vec<Part> = serde_json::from_value(serde_json::json!([
            { "text": "Once" },
            { "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
            { "text": "cap", "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
            { "functionCall": { "name": "noop" } },
            { "inlineData": { "data": "no-mime" } },
            { "text": null, "inlineData": null }
        ]))
        .unwrap();

        assert_eq!(parts[0], Part::text("Once"));
        assert_eq!(parts[1].text, None);
        assert_eq!(parts[1].inline_data.as_ref().unwrap().mime_type, "image/png");
        assert_eq!(parts[2].text.as_deref(), Some("cap"));
        assert_eq!(parts[2].inline_data.as_ref().unwrap().data, "QUJD");
        assert_eq!(parts[3], Part::default());
        assert_eq!(parts[4].inline_data.as_ref().unwrap().mime_type, "");
        assert_eq!(parts[5], Part::default());
    }

    #[test]
    fn test_candidates_prefers_top_level() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "top" }] } }],
            "response": { "candidates": [{ "content": { "parts": [{ "text": "nested" }] } }] }
        }))
        .unwrap();

        assert_eq!(response.candidates().len(), 1);
        assert_eq!(response.candidates()[0].content.parts[0], Part::text("top"));
    }

    #[test]
    fn test_candidates_falls_back_to_envelope() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [],
            "response": { "candidates": [{ "content": { "parts": [{ "text": "nested" }] } }] }
        }))
        .unwrap();

        assert_eq!(response.candidates().len(), 1);
    }

    #[test]
    fn test_candidates_empty_when_absent() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "modelVersion": "x" })).unwrap();
        assert!(response.candidates().is_empty());

        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "response": {} })).unwrap();
        assert!(response.candidates().is_empty());
    }

    #[test]
    fn test_null_candidates_fall_back_to_envelope() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": null,
            "response": { "candidates": [{ "content": { "parts": [{ "text": "nested" }] } }] }
        }))
        .unwrap();

        assert_eq!(response.candidates().len(), 1);
        assert_eq!(response.candidates()[0].content.parts[0], Part::text("nested"));
    }

    #[test]
    fn test_null_candidates_at_both_paths_are_empty() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": null,
            "response": { "candidates": null }
        }))
        .unwrap();
        assert!(response.candidates().is_empty());

        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": null, "response": null }))
                .unwrap();
        assert!(response.candidates().is_empty());
    }

    #[test]
    fn test_null_content_and_parts_are_empty() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": null }, { "content": { "parts": null } }]
        }))
        .unwrap();

        assert_eq!(response.candidates().len(), 2);
        assert!(response.candidates()[0].content.parts.is_empty());
        assert!(response.candidates()[1].content.parts.is_empty());
    }

    #[test]
    fn test_candidate_without_content_has_no_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "finishReason": "SAFETY" }, { "content": { "role": "model" } }]
        }))
        .unwrap();

        assert_eq!(response.candidates().len(), 2);
        assert!(response.candidates()[0].content.parts.is_empty());
        assert!(response.candidates()[1].content.parts.is_empty());
    }
}
