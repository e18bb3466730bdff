//! Generative text abstraction layer.
//!
//! This module provides a trait-based abstraction for text generation
//! backends, plus the Gemini implementation.

mod gemini;
mod provider;

pub use gemini::{GeminiProvider, DEFAULT_GEMINI_MODEL, GEMINI_API_BASE};
#[cfg(any(test, feature = "mock"))]
pub use provider::MockTextGenerator;
pub use provider::{error_text, generate_text, LlmError, TextGenerator, ERROR_TEXT_PREFIX};
