//! Flattens a Gemini response into story text and image data-URIs.

use crate::ai::gemini::types::GenerateContentResponse;
use crate::models::StoryOutput;

/// Shown in place of a story when the service answered with no candidates.
pub const NO_CANDIDATES_WARNING: &str = "⚠️ No candidates returned. Try changing your prompt.";

pub fn data_uri(mime_type: &str, data: &str) -> String {
    format!("data:{};base64,{}", mime_type, data)
}

/// Walk every candidate, then every part, collecting text and images.
///
/// Text is joined with newlines and the result is trimmed at the end. Inline
/// data is kept only for `image/*` MIME types and is passed through untouched.
/// A part may contribute both; a part with neither is skipped.
pub fn normalize(response: &GenerateContentResponse) -> StoryOutput {
    let candidates = response.candidates();
    if candidates.is_empty() {
        return StoryOutput {
            story: NO_CANDIDATES_WARNING.to_string(),
            images: Vec::new(),
        };
    }

    let mut story = String::new();
    let mut images = Vec::new();

    for part in candidates.iter().flat_map(|c| c.content.parts.iter()) {
        if let Some(text) = part.text.as_deref().filter(|t| !t.is_empty()) {
            story.push_str(text);
            story.push('\n');
        }
        if let Some(inline) = part
            .inline_data
            .as_ref()
            .filter(|d| d.mime_type.starts_with("image/"))
        {
            images.push(data_uri(&inline.mime_type, &inline.data));
        }
    }

    StoryOutput {
        story: story.trim_end().to_string(),
        images,
    }
}
