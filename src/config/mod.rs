mod credentials;
mod file_config;

pub use credentials::{Credentials, API_KEY_VAR, CLIENT_ID_VAR, CLIENT_SECRET_VAR};
pub use file_config::{CatalogConfig, CredentialsConfig, FileConfig, GenerativeConfig};

use crate::catalog::{SPOTIFY_ACCOUNTS_BASE, SPOTIFY_API_BASE};
use crate::llm::GEMINI_API_BASE;
use crate::server::RequestsLoggingLevel;
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::net::IpAddr;
use std::time::Duration;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub port: u16,
    pub bind_address: String,
    pub logging_level: RequestsLoggingLevel,
    pub generative_model: String,
    pub request_timeout_sec: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            port: 8501,
            bind_address: "127.0.0.1".to_string(),
            logging_level: RequestsLoggingLevel::Path,
            generative_model: crate::llm::DEFAULT_GEMINI_MODEL.to_string(),
            request_timeout_sec: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub bind_address: IpAddr,
    pub logging_level: RequestsLoggingLevel,
    /// Applied to both backends; `None` leaves the HTTP client default.
    pub request_timeout: Option<Duration>,

    pub catalog: CatalogSettings,
    pub generative: GenerativeSettings,
    pub credentials: Credentials,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    pub api_base_url: String,
    pub accounts_base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerativeSettings {
    pub base_url: String,
    pub model: String,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments, optional TOML file config and
    /// the process environment. TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        Self::resolve_with_env(cli, file_config, |var| std::env::var(var).ok())
    }

    pub fn resolve_with_env<F>(
        cli: &CliConfig,
        file_config: Option<FileConfig>,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);

        let bind_address = file
            .bind_address
            .as_deref()
            .unwrap_or(cli.bind_address.as_str());
        let bind_address: IpAddr = bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {:?}", bind_address))?;

        let logging_level = match file.logging_level {
            Some(level) => match parse_logging_level(&level) {
                Some(parsed) => parsed,
                None => bail!("Invalid logging_level in config file: {:?}", level),
            },
            None => cli.logging_level.clone(),
        };

        let request_timeout = match file.request_timeout_sec.or(cli.request_timeout_sec) {
            Some(0) => bail!("request_timeout_sec must be greater than zero"),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        let catalog_file = file.catalog.unwrap_or_default();
        let catalog = CatalogSettings {
            api_base_url: catalog_file
                .api_base_url
                .unwrap_or_else(|| SPOTIFY_API_BASE.to_string()),
            accounts_base_url: catalog_file
                .accounts_base_url
                .unwrap_or_else(|| SPOTIFY_ACCOUNTS_BASE.to_string()),
        };

        let generative_file = file.generative.unwrap_or_default();
        let model = generative_file
            .model
            .unwrap_or_else(|| cli.generative_model.clone());
        if model.trim().is_empty() {
            bail!("Generative model name must not be empty");
        }
        let generative = GenerativeSettings {
            base_url: generative_file
                .base_url
                .unwrap_or_else(|| GEMINI_API_BASE.to_string()),
            model,
        };

        let credentials = Credentials::resolve(env, file.credentials.as_ref());

        Ok(Self {
            port,
            bind_address,
            logging_level,
            request_timeout,
            catalog,
            generative,
            credentials,
        })
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
