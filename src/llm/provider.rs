//! Text generation provider trait and the displayable-text adapter.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

/// Prefix of every downgraded generation failure.
pub const ERROR_TEXT_PREFIX: &str = "Error: ";

/// Errors that can occur while generating text.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("generative API key is not configured ({0})")]
    MissingCredentials(&'static str),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("request timed out")]
    Timeout,

    #[error("rate limited by generative backend")]
    RateLimited,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// A backend that turns a natural-language prompt into text.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Backend name, used in logs.
    fn name(&self) -> &str;

    /// Model identifier.
    fn model(&self) -> &str;

    /// One blocking round trip: no retries, no streaming.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Formats a failure as displayable text.
pub fn error_text(description: impl std::fmt::Display) -> String {
    format!("{}{}", ERROR_TEXT_PREFIX, description)
}

/// Generates text for `prompt`, converting any backend failure into a string
/// starting with [`ERROR_TEXT_PREFIX`]. Never fails.
pub async fn generate_text(generator: &dyn TextGenerator, prompt: &str) -> String {
    match generator.generate(prompt).await {
        Ok(text) => text,
        Err(err) => {
            warn!(
                backend = generator.name(),
                model = generator.model(),
                error = %err,
                "Text generation failed"
            );
            error_text(err)
        }
    }
}
