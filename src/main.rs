use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::{fmt::Debug, path::PathBuf};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use music_assistant::assistant::Assistant;
use music_assistant::catalog::{CatalogClient, SpotifyCatalogClient};
use music_assistant::config::{AppConfig, CliConfig, FileConfig};
use music_assistant::llm::{GeminiProvider, TextGenerator, DEFAULT_GEMINI_MODEL};
use music_assistant::server::{run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 8501)]
    pub port: u16,

    /// The address to bind to.
    #[clap(long, default_value = "127.0.0.1")]
    pub bind_address: String,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Gemini model used for text generation.
    #[clap(long, default_value = DEFAULT_GEMINI_MODEL)]
    pub generative_model: String,

    /// Timeout in seconds for backend requests. Unset means no timeout.
    #[clap(long)]
    pub request_timeout_sec: Option<u64>,
}

impl CliArgs {
    fn to_cli_config(&self) -> CliConfig {
        CliConfig {
            port: self.port,
            bind_address: self.bind_address.clone(),
            logging_level: self.logging_level.clone(),
            generative_model: self.generative_model.clone(),
            request_timeout_sec: self.request_timeout_sec,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&cli_args.to_cli_config(), file_config)?;

    let missing = config.credentials.missing();
    if !missing.is_empty() {
        warn!(
            "Missing credentials: {}. Features that need them will report an error.",
            missing.join(", ")
        );
    }

    let catalog: Arc<dyn CatalogClient> = Arc::new(SpotifyCatalogClient::with_base_urls(
        &config.catalog.api_base_url,
        &config.catalog.accounts_base_url,
        config.credentials.client_id.clone(),
        config.credentials.client_secret.clone(),
        config.request_timeout,
    )?);
    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiProvider::new(
        &config.generative.base_url,
        &config.generative.model,
        config.credentials.api_key.clone(),
        config.request_timeout,
    )?);
    info!(
        "Using catalog {} and model {}",
        catalog.name(),
        generator.model()
    );

    let assistant = Arc::new(Assistant::new(catalog, generator));

    let server_config = ServerConfig {
        requests_logging_level: config.logging_level,
        port: config.port,
        bind_address: config.bind_address,
    };
    run_server(server_config, assistant).await
}
