pub const STORY_TEMPLATE: &str = include_str!("../data/prompts/story.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// Wrap a user prompt in the story-and-illustrations instruction.
///
/// The prompt is always the final text of the result.
pub fn story_request(prompt: &str) -> String {
    render(STORY_TEMPLATE.trim_end(), &[("prompt", prompt)])
}
