use super::client::GeminiHttpClient;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::ai::StoryService;
use crate::models::Config;
use crate::{prompts, Result};
use async_trait::async_trait;

pub struct GeminiStoryClient {
    http: GeminiHttpClient,
}

impl GeminiStoryClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(api_key, model, client),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            http: GeminiHttpClient::new(config.gemini_api_key.clone(), config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.request_timeout),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    pub fn model(&self) -> &str {
        self.http.model()
    }

    /// Single user message carrying the templated prompt, asking for text and images.
    pub fn build_request(prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompts::story_request(prompt))],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
            },
        }
    }
}

#[async_trait]
impl StoryService for GeminiStoryClient {
    async fn generate_story(&self, prompt: &str) -> Result<GenerateContentResponse> {
        let request = Self::build_request(prompt);

        tracing::debug!(
            "Sending story request to Gemini (model: {}, prompt {} bytes)",
            self.http.model(),
            prompt.len()
        );

        self.http.generate_content(&request).await
    }
}
