use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use super::state::{GuardedAssistant, ServerState};
use crate::assistant::{Mode, ModeDescriptor, ModeRequest};

/// GET /v1/modes - Modes in navigation order, with their inputs.
async fn get_modes() -> Json<Vec<ModeDescriptor>> {
    Json(Mode::ALL.into_iter().map(ModeDescriptor::from).collect())
}

/// POST /v1/assist - Runs one submission. A validation warning is a 400.
async fn post_assist(
    State(assistant): State<GuardedAssistant>,
    Json(request): Json<ModeRequest>,
) -> impl IntoResponse {
    let outcome = assistant.submit(&request).await;
    let status = if outcome.is_warning() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(outcome))
}

pub fn make_api_routes(state: ServerState) -> Router {
    Router::new()
        .route("/modes", get(get_modes))
        .route("/assist", post(post_assist))
        .with_state(state)
}
