//! Application orchestration for one prompt-to-story generation cycle.

use crate::ai::{GeminiStoryClient, StoryService};
use crate::models::Config;
use crate::session::{CycleOutcome, SkipReason, UiState};
use tokio::sync::Mutex;
use tracing::info;

/// Owns the UI state and the story service that feeds it.
pub struct App {
    story: Box<dyn StoryService>,
    state: Mutex<UiState>,
}

/// Injectable service bundle used to construct [`App`] in tests/harnesses.
pub struct AppServices {
    pub story: Box<dyn StoryService>,
}

impl App {
    /// Build an app from concrete service dependencies.
    pub fn with_services(services: AppServices) -> Self {
        Self {
            story: services.story,
            state: Mutex::new(UiState::new()),
        }
    }

    /// Construct an app backed by Gemini using the given configuration.
    pub fn new(config: &Config) -> Self {
        let client = GeminiStoryClient::from_config(config);
        info!("Story provider: Gemini (model: {})", client.model());
        Self::with_services(AppServices {
            story: Box::new(client),
        })
    }

    pub async fn set_prompt(&self, text: impl Into<String>) {
        self.state.lock().await.set_prompt(text);
    }

    /// Copy of the current state for rendering.
    pub async fn snapshot(&self) -> UiState {
        self.state.lock().await.clone()
    }

    /// Run one generation cycle for the current prompt.
    ///
    /// The state lock is released while the service call is outstanding, so
    /// readers observe Loading; a concurrent submit is turned away by the
    /// phase guard rather than queued.
    pub async fn submit(&self) -> CycleOutcome {
        match self.begin_cycle().await {
            Ok(pending) => self.finish_cycle(pending).await,
            Err(reason) => CycleOutcome::Skipped(reason),
        }
    }

    /// First half of [`App::submit`]: enter Loading and claim the prompt.
    pub async fn begin_cycle(&self) -> Result<PendingCycle, SkipReason> {
        match self.state.lock().await.begin_request() {
            Ok(prompt) => {
                info!("Generating story ({} byte prompt)", prompt.len());
                Ok(PendingCycle { prompt })
            }
            Err(reason) => {
                info!("Submit ignored: {:?}", reason);
                Err(reason)
            }
        }
    }

    /// Second half of [`App::submit`]: call the service and return to Idle.
    pub async fn finish_cycle(&self, pending: PendingCycle) -> CycleOutcome {
        let result = self.story.generate_story(&pending.prompt).await;
        self.state.lock().await.complete(result)
    }
}

/// A cycle that has entered Loading and must be finished.
///
/// Only [`App::begin_cycle`] hands these out.
#[derive(Debug)]
pub struct PendingCycle {
    prompt: String,
}
