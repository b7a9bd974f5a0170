pub mod client;
pub mod story;
pub mod types;

pub use client::GeminiHttpClient;
pub use story::GeminiStoryClient;
pub use types::GenerateContentResponse;
