//! Google Gemini text generation provider.

use super::provider::{LlmError, TextGenerator};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";

/// Header carrying the API key, kept out of the request URL.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` provider.
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the API (e.g., "https://generativelanguage.googleapis.com").
    /// * `model` - Model to use (e.g., "gemini-1.5-pro").
    /// * `api_key` - API key; a missing key fails on the first request.
    /// * `timeout` - Optional request timeout, none by default.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredentials("GOOGLE_API_KEY"))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::Connection(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            LlmError::InvalidResponse(format!("Failed to parse Gemini response: {}", e))
        })?;

        if let Some(error) = body.error {
            return Err(LlmError::Api {
                status: error.code.unwrap_or(status.as_u16()),
                message: error.message.unwrap_or_default(),
            });
        }

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(LlmError::InvalidResponse(
                "No text in Gemini response".to_string(),
            ));
        }

        debug!(response_chars = text.chars().count(), "Received Gemini response");
        Ok(text)
    }
}

/// Pulls `error.message` out of an error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<GenerateContentResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string())
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<GeminiApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    code: Option<u16>,
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::generate_text;
    use axum::{
        extract::{Path, State},
        http::HeaderMap,
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeGemini {
        requests: AtomicUsize,
    }

    async fn generate_content(
        State(fake): State<Arc<FakeGemini>>,
        Path(model_action): Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        fake.requests.fetch_add(1, Ordering::SeqCst);
        assert_eq!(model_action, "test-model:generateContent");

        if headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) != Some("good-key") {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": {"code": 400, "message": "API key not valid"}})),
            );
        }

        let prompt = body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        match prompt.as_str() {
            "empty" => (
                StatusCode::OK,
                Json(json!({"candidates": [{"content": {"parts": []}}]})),
            ),
            "quota" => (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"error": {"code": 429, "message": "quota"}})),
            ),
            _ => (
                StatusCode::OK,
                Json(json!({
                    "candidates": [{
                        "content": {
                            "role": "model",
                            "parts": [{"text": "echo: "}, {"text": prompt}]
                        }
                    }]
                })),
            ),
        }
    }

    async fn spawn_fake() -> (String, Arc<FakeGemini>) {
        let fake = Arc::new(FakeGemini::default());
        let app = Router::new()
            .route("/v1beta/models/{model_action}", post(generate_content))
            .with_state(fake.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), fake)
    }

    fn provider(base: &str, key: Option<&str>) -> GeminiProvider {
        GeminiProvider::new(
            base,
            "test-model",
            key.map(String::from),
            Some(Duration::from_secs(5)),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn concatenates_candidate_parts() {
        let (base, _fake) = spawn_fake().await;
        let provider = provider(&base, Some("good-key"));

        let text = provider.generate("hello").await.unwrap();
        assert_eq!(text, "echo: hello");
    }

    #[tokio::test]
    async fn invalid_key_surfaces_api_message() {
        let (base, _fake) = spawn_fake().await;
        let provider = provider(&base, Some("bad-key"));

        let err = provider.generate("hello").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn missing_key_fails_without_a_request() {
        let (base, fake) = spawn_fake().await;
        let provider = provider(&base, None);

        let text = generate_text(&provider, "hello").await;
        assert!(text.starts_with("Error: "));
        assert!(text.contains("GOOGLE_API_KEY"));
        assert_eq!(fake.requests.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn connection_failure_does_not_reveal_the_key() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let provider = provider(&base, Some("SECRET-KEY-123"));

        let err = provider.generate("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::Connection(_)), "{:?}", err);

        let text = generate_text(&provider, "hello").await;
        assert!(text.starts_with("Error: "));
        assert!(!text.contains("SECRET-KEY-123"), "{}", text);
    }

    #[tokio::test]
    async fn empty_candidates_are_invalid() {
        let (base, _fake) = spawn_fake().await;
        let provider = provider(&base, Some("good-key"));

        let err = provider.generate("empty").await.unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn rate_limit_is_reported() {
        let (base, _fake) = spawn_fake().await;
        let provider = provider(&base, Some("good-key"));

        let err = provider.generate("quota").await.unwrap_err();
        assert!(matches!(err, LlmError::RateLimited));
    }

    #[test]
    fn request_serializes_as_user_content() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some("hi".to_string()),
                }],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"contents": [{"role": "user", "parts": [{"text": "hi"}]}]})
        );
    }
}
