use axum::extract::FromRef;

use crate::assistant::Assistant;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedAssistant = Arc<Assistant>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub assistant: GuardedAssistant,
    pub hash: String,
}

impl FromRef<ServerState> for GuardedAssistant {
    fn from_ref(input: &ServerState) -> Self {
        input.assistant.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
