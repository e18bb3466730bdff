//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all assistant endpoints.
//!
//! When routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // Pages
    // ========================================================================

    /// GET /
    pub async fn get_home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// GET /mode/{slug}
    pub async fn get_mode_page(&self, slug: &str) -> Response {
        self.client
            .get(format!("{}/mode/{}", self.base_url, slug))
            .send()
            .await
            .expect("Mode page request failed")
    }

    /// POST /mode/{slug} with form fields
    pub async fn submit_form(&self, slug: &str, fields: &[(&str, &str)]) -> Response {
        self.client
            .post(format!("{}/mode/{}", self.base_url, slug))
            .form(fields)
            .send()
            .await
            .expect("Form submission failed")
    }

    /// Submits a form and returns the rendered page
    pub async fn submit_form_html(&self, slug: &str, fields: &[(&str, &str)]) -> String {
        let response = self.submit_form(slug, fields).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.text().await.expect("Failed to read page")
    }

    // ========================================================================
    // JSON API
    // ========================================================================

    /// GET /v1/modes
    pub async fn get_modes(&self) -> Response {
        self.client
            .get(format!("{}/v1/modes", self.base_url))
            .send()
            .await
            .expect("Modes request failed")
    }

    /// POST /v1/assist
    pub async fn assist(&self, request: Value) -> Response {
        self.client
            .post(format!("{}/v1/assist", self.base_url))
            .json(&request)
            .send()
            .await
            .expect("Assist request failed")
    }

    /// GET /v1/status
    pub async fn get_status(&self) -> Response {
        self.client
            .get(format!("{}/v1/status", self.base_url))
            .send()
            .await
            .expect("Status request failed")
    }
}
