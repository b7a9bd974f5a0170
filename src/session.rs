//! UI state and the Idle/Loading state machine for one generation cycle.

use crate::ai::GenerateContentResponse;
use crate::normalize::normalize;
use crate::Result;
use tracing::{error, info};

/// Shown in place of a story when the generation call fails for any reason.
pub const FAILURE_MESSAGE: &str = "⚠️ Failed to generate content. Check console.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
}

impl Phase {
    pub fn button_label(self) -> &'static str {
        match self {
            Phase::Idle => "Generate Story & Images",
            Phase::Loading => "Generating...",
        }
    }
}

/// Why a submission did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    EmptyPrompt,
    InFlight,
}

/// How one call to submit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Skipped(SkipReason),
    Completed { images: usize },
    EmptyResult,
    Failed,
}

/// Everything the page renders from.
///
/// Story and images change only in [`UiState::begin_request`] and
/// [`UiState::complete`], never piecemeal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    prompt: String,
    story: String,
    images: Vec<String>,
    phase: Phase,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn story(&self) -> &str {
        &self.story
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// JSON view used by `/state` and `generate --format json`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "prompt": self.prompt,
            "story": self.story,
            "images": self.images,
            "loading": self.is_loading(),
        })
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    /// Idle -> Loading. Clears the previous result and yields the prompt to send.
    pub fn begin_request(&mut self) -> std::result::Result<String, SkipReason> {
        if self.is_loading() {
            return Err(SkipReason::InFlight);
        }
        if self.prompt.trim().is_empty() {
            return Err(SkipReason::EmptyPrompt);
        }

        self.phase = Phase::Loading;
        self.story.clear();
        self.images.clear();
        Ok(self.prompt.clone())
    }

    /// Loading -> Idle, installing the result of the call.
    pub fn complete(&mut self, result: Result<GenerateContentResponse>) -> CycleOutcome {
        let outcome = match result {
            Ok(response) => {
                let empty = response.candidates().is_empty();
                let output = normalize(&response);
                self.story = output.story;
                self.images = output.images;
                if empty {
                    CycleOutcome::EmptyResult
                } else {
                    CycleOutcome::Completed {
                        images: self.images.len(),
                    }
                }
            }
            Err(e) => {
                error!("Story generation failed: {}", e);
                self.story = FAILURE_MESSAGE.to_string();
                self.images = Vec::new();
                CycleOutcome::Failed
            }
        };

        self.phase = Phase::Idle;
        info!(
            "Generation cycle finished: {:?} (story {} bytes)",
            outcome,
            self.story.len()
        );
        outcome
    }
}
