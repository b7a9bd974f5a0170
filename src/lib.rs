//! Story and illustration generator backed by Gemini.
//!
//! Takes a free-text prompt, asks a Gemini image-capable model for a short
//! story with inline illustrations, and renders the returned text and images
//! either as a browser page or on the terminal.

pub mod ai;
pub mod app;
pub mod error;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod render;
pub mod session;
pub mod web;

pub use error::{Error, Result};
