use super::{GenerateContentResponse, StoryService};
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

enum MockReply {
    Response(GenerateContentResponse),
    Failure(String),
}

/// Scripted [`StoryService`] for tests and offline runs.
///
/// Replies are consumed in order; once exhausted the mock answers with an
/// empty response. Clones share their script and counters.
#[derive(Clone)]
pub struct MockStoryClient {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
    delay: Option<Duration>,
}

impl MockStoryClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            delay: None,
        }
    }

    pub fn with_response(self, response: GenerateContentResponse) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Response(response));
        self
    }

    /// Queue a response given as raw Gemini JSON.
    pub fn with_json_response(self, json: serde_json::Value) -> Self {
        let response =
            serde_json::from_value(json).expect("mock response JSON must match Gemini shape");
        self.with_response(response)
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(message.to_string()));
        self
    }

    /// Hold each call open for `delay` before replying.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockStoryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoryService for MockStoryClient {
    async fn generate_story(&self, prompt: &str) -> Result<GenerateContentResponse> {
        *self.call_count.lock().unwrap() += 1;
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Failure(message)) => Err(Error::AiProvider(message)),
            None => Ok(GenerateContentResponse::default()),
        }
    }
}
