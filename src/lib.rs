//! AI Music Assistant Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod llm;
pub mod prompts;
pub mod server;
pub mod view;

// Re-export commonly used types for convenience
pub use assistant::{Assistant, Mode, ModeOutcome, ModeRequest};
pub use catalog::{CatalogClient, CatalogError, SpotifyCatalogClient, TrackRecord};
pub use llm::{GeminiProvider, LlmError, TextGenerator};
pub use server::{make_app, run_server, RequestsLoggingLevel, ServerConfig};
