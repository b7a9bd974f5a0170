//! Data models and structures
//!
//! Runtime configuration and the flattened story output produced from a
//! Gemini response.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-preview-image-generation";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Story text and image data-URIs extracted from one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryOutput {
    pub story: String,
    pub images: Vec<String>,
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Empty when `GEMINI_API_KEY` is unset; requests then fail at send time.
    pub gemini_api_key: String,
    pub model: String,
    pub base_url: String,
    pub request_timeout: Option<Duration>,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY").unwrap_or_default();
        if gemini_api_key.trim().is_empty() {
            tracing::warn!("GEMINI_API_KEY not set; story generation requests will fail");
        }

        let request_timeout = match lookup("STORY_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    crate::Error::Config(format!(
                        "STORY_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let bind_raw = lookup("STORY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = parse_bind_addr(&bind_raw)?;

        Ok(Self {
            gemini_api_key,
            model: lookup("STORY_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout,
            bind_addr,
        })
    }
}

pub fn parse_bind_addr(input: &str) -> crate::Result<SocketAddr> {
    input.trim().parse().map_err(|_| {
        crate::Error::Config(format!(
            "Invalid bind address '{}'. Expected format: HOST:PORT",
            input
        ))
    })
}
