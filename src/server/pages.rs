//! Browser-facing routes: one HTML page per mode.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use tracing::debug;

use super::state::{GuardedAssistant, ServerState};
use crate::assistant::{Mode, ModeRequest};
use crate::view::render_page;

fn unknown_mode(slug: &str) -> Response {
    debug!("Requested unknown mode {:?}", slug);
    (StatusCode::NOT_FOUND, format!("Unknown mode: {}", slug)).into_response()
}

async fn home() -> Html<String> {
    Html(render_page(Mode::default(), None, None))
}

async fn get_mode_page(Path(slug): Path<String>) -> Response {
    match Mode::from_slug(&slug) {
        Some(mode) => Html(render_page(mode, None, None)).into_response(),
        None => unknown_mode(&slug),
    }
}

async fn post_mode_page(
    State(assistant): State<GuardedAssistant>,
    Path(slug): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let Some(mode) = Mode::from_slug(&slug) else {
        return unknown_mode(&slug);
    };
    let request = ModeRequest::from_form(mode, &form);
    let outcome = assistant.submit(&request).await;
    Html(render_page(mode, Some(&request), Some(&outcome))).into_response()
}

pub fn make_page_routes(state: ServerState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/mode/{slug}", get(get_mode_page).post(post_mode_page))
        .with_state(state)
}
