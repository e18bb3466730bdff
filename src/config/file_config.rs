use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Server settings (can override CLI)
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub logging_level: Option<String>,
    pub request_timeout_sec: Option<u64>,

    // Backend sections
    pub catalog: Option<CatalogConfig>,
    pub generative: Option<GenerativeConfig>,
    pub credentials: Option<CredentialsConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct CatalogConfig {
    pub api_base_url: Option<String>,
    pub accounts_base_url: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct GenerativeConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
}

/// Fallback secrets; environment variables take precedence.
#[derive(Deserialize, Default, Clone)]
#[serde(default)]
pub struct CredentialsConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_key: Option<String>,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("client_id", &self.client_id.as_ref().map(|_| "<set>"))
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<set>"))
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .finish()
    }
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
