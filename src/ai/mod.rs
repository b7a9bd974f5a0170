//! AI service integration for story and illustration generation
//!
//! Provides the Gemini `generateContent` client and a mock used by tests and
//! local harnesses.

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiStoryClient, GenerateContentResponse};
pub use mock::MockStoryClient;

use crate::Result;
use async_trait::async_trait;

/// Generates a story with inline illustrations for a user prompt.
///
/// Implementations return the raw provider response; flattening it into
/// story text and images is left to [`crate::normalize`].
#[async_trait]
pub trait StoryService: Send + Sync {
    async fn generate_story(&self, prompt: &str) -> Result<GenerateContentResponse>;
}
