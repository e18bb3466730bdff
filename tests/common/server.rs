//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server wired to its own fake backends.

use super::constants::*;
use super::fixtures::spawn_fake_backends;
use music_assistant::assistant::Assistant;
use music_assistant::catalog::SpotifyCatalogClient;
use music_assistant::llm::GeminiProvider;
use music_assistant::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Test server instance backed by fake catalog and generative services
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// Base URL of the fake backends
    pub backend_url: String,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port with valid credentials
    pub async fn spawn() -> Self {
        Self::spawn_with_credentials(
            Some(TEST_CLIENT_ID.to_string()),
            Some(TEST_CLIENT_SECRET.to_string()),
            Some(TEST_API_KEY.to_string()),
        )
        .await
    }

    /// Spawns a server as if none of the credential variables were set
    pub async fn spawn_without_credentials() -> Self {
        Self::spawn_with_credentials(None, None, None).await
    }

    /// Spawns a new test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if:
    /// - Port binding fails
    /// - Server fails to start
    /// - Server doesn't become ready within timeout
    pub async fn spawn_with_credentials(
        client_id: Option<String>,
        client_secret: Option<String>,
        api_key: Option<String>,
    ) -> Self {
        let backend_url = spawn_fake_backends().await;
        let timeout = Some(Duration::from_secs(REQUEST_TIMEOUT_SECS));

        let catalog = SpotifyCatalogClient::with_base_urls(
            &backend_url,
            &backend_url,
            client_id,
            client_secret,
            timeout,
        )
        .expect("Failed to build catalog client");
        let generator = GeminiProvider::new(&backend_url, TEST_MODEL, api_key, timeout)
            .expect("Failed to build generative client");
        let assistant = Arc::new(Assistant::new(Arc::new(catalog), Arc::new(generator)));

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let app = make_app(config, assistant).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            backend_url,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the status endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client
                .get(format!("{}/v1/status", self.base_url))
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
