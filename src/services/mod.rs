//! Content fetched from the generative text service.
//!
//! - [`config`]: endpoint, model and key captured at build time
//! - [`genai`]: wire types, the [`TextGenerator`] seam and the HTTP client
//! - [`content`]: insight/challenge payloads with their fallback policy

pub mod config;
pub mod content;
pub mod genai;

pub use config::GenAiConfig;
pub use content::{Challenge, Fetched, Insight, fetch_challenge, fetch_insight};
pub use genai::{ContentError, GeminiClient, GenerateRequest, TextGenerator};
