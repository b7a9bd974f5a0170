//! Renders the UI state as an HTML page or as plain terminal text.

use crate::session::UiState;

const PAGE_TITLE: &str = "AI Story & Image Generator";
const PROMPT_PLACEHOLDER: &str = "Enter your story prompt...";

/// Seconds between reloads while a request is outstanding.
const LOADING_REFRESH_SECS: u32 = 2;

const STYLE: &str = r#"
body { min-height: 100vh; margin: 0; padding: 1.5rem; background: #f3f4f6; font-family: system-ui, sans-serif; display: flex; flex-direction: column; align-items: center; }
h1 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
form { width: 100%; max-width: 32rem; display: flex; flex-direction: column; align-items: center; }
textarea { width: 100%; box-sizing: border-box; padding: 0.75rem; border: 1px solid #d1d5db; border-radius: 0.5rem; margin-bottom: 1rem; min-height: 6rem; }
button { padding: 0.5rem 1.5rem; background: #2563eb; color: #fff; border: none; border-radius: 0.5rem; cursor: pointer; }
button:disabled { background: #9ca3af; cursor: default; }
.story { max-width: 42rem; margin-top: 1.5rem; padding: 1rem; background: #fff; border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.15); }
.story h2 { font-size: 1.25rem; font-weight: 600; margin: 0 0 0.5rem; }
.story p { color: #1f2937; white-space: pre-line; margin: 0; }
.images { display: grid; grid-template-columns: repeat(1, minmax(0, 1fr)); gap: 1rem; margin-top: 1.5rem; max-width: 64rem; }
.images img { width: 100%; border-radius: 0.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.15); }
@media (min-width: 768px) { .images { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
"#;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Full page for `GET /`.
pub fn render_page(state: &UiState) -> String {
    let loading = state.is_loading();
    let refresh = if loading {
        format!(
            r#"<meta http-equiv="refresh" content="{}">"#,
            LOADING_REFRESH_SECS
        )
    } else {
        String::new()
    };
    let disabled = if loading { " disabled" } else { "" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{refresh}<title>{title}</title>
<style>{style}</style>
</head>
<body>
<h1>{title}</h1>
<form method="post" action="/generate">
<textarea name="prompt" placeholder="{placeholder}"{disabled}>{prompt}</textarea>
<button type="submit"{disabled}>{label}</button>
</form>
{story}{images}</body>
</html>
"#,
        refresh = refresh,
        title = html_escape(PAGE_TITLE),
        style = STYLE,
        placeholder = html_escape(PROMPT_PLACEHOLDER),
        disabled = disabled,
        prompt = html_escape(state.prompt()),
        label = html_escape(state.phase().button_label()),
        story = render_story(state.story()),
        images = render_images(state.images()),
    )
}

fn render_story(story: &str) -> String {
    if story.is_empty() {
        return String::new();
    }
    format!(
        "<div class=\"story\">\n<h2>Generated Story</h2>\n<p>{}</p>\n</div>\n",
        html_escape(story)
    )
}

fn render_images(images: &[String]) -> String {
    if images.is_empty() {
        return String::new();
    }
    let tiles: String = images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            format!(
                "<img src=\"{}\" alt=\"Generated {}\">\n",
                html_escape(src),
                i
            )
        })
        .collect();
    format!("<div class=\"images\">\n{}</div>\n", tiles)
}

/// Terminal rendering for `generate --format text`.
///
/// Images are listed by index, MIME type and data-URI length rather than
/// dumped inline.
pub fn render_text(state: &UiState) -> String {
    let mut out = String::new();
    if !state.story().is_empty() {
        out.push_str(state.story());
        out.push('\n');
    }
    if !state.images().is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("Images ({}):\n", state.images().len()));
        for (i, uri) in state.images().iter().enumerate() {
            let mime = uri
                .strip_prefix("data:")
                .and_then(|rest| rest.split(';').next())
                .unwrap_or("unknown");
            out.push_str(&format!(
                "  [Generated {}] {} (data URI, {} chars)\n",
                i,
                mime,
                uri.chars().count()
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::GenerateContentResponse;

    fn finished_state(json: serde_json::Value) -> UiState {
        let mut state = UiState::new();
        state.set_prompt("a lonely robot");
        state.begin_request().unwrap();
        let response: GenerateContentResponse = serde_json::from_value(json).unwrap();
        state.complete(Ok(response));
        state
    }

    #[test]
    fn test_idle_page_has_enabled_form_and_no_results() {
        let html = render_page(&UiState::new());
        assert!(html.contains("<h1>AI Story &amp; Image Generator</h1>"));
        assert!(html.contains(r#"placeholder="Enter your story prompt...""#));
        assert!(html.contains(r#"<button type="submit">Generate Story &amp; Images</button>"#));
        assert!(!html.contains("http-equiv=\"refresh\""));
        assert!(!html.contains("Generated Story"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_loading_page_disables_button_and_refreshes() {
        let mut state = UiState::new();
        state.set_prompt("a lonely robot");
        state.begin_request().unwrap();

        let html = render_page(&state);
        assert!(html.contains(r#"<button type="submit" disabled>Generating...</button>"#));
        assert!(html.contains(r#"<meta http-equiv="refresh" content="2">"#));
        assert!(html.contains(">a lonely robot</textarea>"));
    }

    #[test]
    fn test_story_and_images_render_in_order() {
        let state = finished_state(serde_json::json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Once upon a time." },
                { "text": "The end." },
                { "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
                { "inlineData": { "mimeType": "image/jpeg", "data": "REVG" } }
            ] } }]
        }));

        let html = render_page(&state);
        assert!(html.contains("<p>Once upon a time.\nThe end.</p>"));
        let first = html
            .find(r#"<img src="data:image/png;base64,QUJD" alt="Generated 0">"#)
            .unwrap();
        let second = html
            .find(r#"<img src="data:image/jpeg;base64,REVG" alt="Generated 1">"#)
            .unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_model_text_is_escaped() {
        let state = finished_state(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "<script>alert(1)</script>" }] } }]
        }));

        let html = render_page(&state);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_text_rendering_lists_images() {
        let state = finished_state(serde_json::json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Story" },
                { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
            ] } }]
        }));

        let text = render_text(&state);
        assert!(text.starts_with("Story\n\nImages (1):\n"));
        assert!(text.contains("[Generated 0] image/png (data URI, 26 chars)"));
    }

    #[test]
    fn test_text_rendering_of_empty_state_is_empty() {
        assert_eq!(render_text(&UiState::new()), "");
    }
}
