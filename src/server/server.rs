use anyhow::{Context, Result};
use std::{
    net::SocketAddr,
    sync::Arc,
    time::{Duration, Instant},
};

use tracing::info;

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::{log_requests, make_api_routes, make_page_routes, state::*, ServerConfig};
use crate::assistant::Assistant;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub version: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn status(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(stats)
}

pub fn make_app(config: ServerConfig, assistant: Arc<Assistant>) -> Result<Router> {
    let state = ServerState {
        config,
        start_time: Instant::now(),
        assistant,
        hash: env!("GIT_HASH").to_string(),
    };

    let api_routes: Router = make_api_routes(state.clone()).merge(
        Router::new()
            .route("/status", get(status))
            .with_state(state.clone()),
    );

    let app: Router = make_page_routes(state.clone())
        .nest("/v1", api_routes)
        .layer(middleware::from_fn_with_state(state.clone(), log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, assistant: Arc<Assistant>) -> Result<()> {
    let address = SocketAddr::new(config.bind_address, config.port);
    let app = make_app(config, assistant)?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Ready to serve at http://{}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
