//! Fake catalog and generative backends
//!
//! One local axum server plays both the Spotify accounts/API hosts and the
//! Gemini host, so the real adapters can be pointed at it.

use super::constants::*;
use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use tokio::net::TcpListener;

fn track_json(id: &str, name: &str, artist: &str, release_date: &str, preview: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": name,
        "artists": [{ "name": artist }],
        "album": { "release_date": release_date },
        "preview_url": preview,
    })
}

async fn token(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Basic "));
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "invalid_client" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "access_token": TEST_ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600,
        })),
    )
}

async fn search(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let expected = format!("Bearer {}", TEST_ACCESS_TOKEN);
    if headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "status": 401, "message": "Invalid access token" } })),
        );
    }

    let query = params.get("q").map(String::as_str).unwrap_or_default();
    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);

    let items: Vec<Value> = match query {
        NO_MATCH_QUERY => vec![],
        PREVIEW_QUERY => vec![
            track_json("cover-1", "Yesterday (Cover)", "Someone Else", "2011-03-01", None),
            track_json(
                PREVIEW_TRACK_ID,
                PREVIEW_TRACK_TITLE,
                PREVIEW_TRACK_ARTIST,
                "1965-08-06",
                Some(PREVIEW_URL),
            ),
        ],
        EMBED_ONLY_QUERY => vec![
            track_json(EMBED_TRACK_ID, "B-Side", "Unknown Band", "1999", None),
            track_json("track-2", "B-Side (Live)", "Unknown Band", "2000", None),
        ],
        _ => (1..=GENERIC_RESULT_COUNT)
            .map(|i| {
                track_json(
                    &format!("generic-{}", i),
                    &format!("{} #{}", query, i),
                    "Various Artists",
                    "1984-01-01",
                    None,
                )
            })
            .collect(),
    };

    let items: Vec<Value> = items.into_iter().take(limit).collect();
    (StatusCode::OK, Json(json!({ "tracks": { "items": items } })))
}

async fn generate_content(
    Path(model_action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(TEST_API_KEY) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": { "code": 400, "message": "API key not valid." } })),
        );
    }
    if model_action != format!("{}:generateContent", TEST_MODEL) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": { "code": 404, "message": "model not found" } })),
        );
    }

    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": format!("{}{}", GENERATED_PREFIX, prompt) }] }
            }]
        })),
    )
}

/// Starts the fake backends on a random local port and returns their base URL.
pub async fn spawn_fake_backends() -> String {
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/search", get(search))
        .route("/v1beta/models/{model_action}", post(generate_content));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backends");
    let address = listener.local_addr().expect("Failed to get local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake backends failed");
    });

    format!("http://{}", address)
}
