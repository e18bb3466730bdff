//! Spotify Web API catalog backend.
//!
//! Authenticates with the client-credentials flow and keeps the access token
//! until shortly before it expires.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::client::{CatalogClient, CatalogError};
use super::models::TrackRecord;

pub const SPOTIFY_API_BASE: &str = "https://api.spotify.com";
pub const SPOTIFY_ACCOUNTS_BASE: &str = "https://accounts.spotify.com";

/// Largest page the search endpoint accepts.
const MAX_SEARCH_LIMIT: usize = 50;

/// Tokens are refreshed this long before the server-side expiry.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: Instant,
}

impl AccessToken {
    fn is_fresh(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

pub struct SpotifyCatalogClient {
    client: Client,
    api_base_url: String,
    accounts_base_url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    token: Mutex<Option<AccessToken>>,
}

impl SpotifyCatalogClient {
    /// Create a client against the given API and accounts endpoints.
    pub fn with_base_urls(
        api_base_url: impl Into<String>,
        accounts_base_url: impl Into<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            accounts_base_url: accounts_base_url.into().trim_end_matches('/').to_string(),
            client_id: client_id.filter(|s| !s.trim().is_empty()),
            client_secret: client_secret.filter(|s| !s.trim().is_empty()),
            token: Mutex::new(None),
        })
    }

    async fn access_token(&self) -> Result<String, CatalogError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.value.clone());
        }

        let token = self.request_token().await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    async fn request_token(&self) -> Result<AccessToken, CatalogError> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or(CatalogError::MissingCredentials("SPOTIPY_CLIENT_ID"))?;
        let client_secret = self
            .client_secret
            .as_deref()
            .ok_or(CatalogError::MissingCredentials("SPOTIPY_CLIENT_SECRET"))?;

        let url = format!("{}/api/token", self.accounts_base_url);
        let basic = STANDARD.encode(format!("{}:{}", client_id, client_secret));

        debug!("Requesting catalog access token");
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Basic {}", basic))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(CatalogError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Catalog token request rejected");
            return Err(CatalogError::Auth(format!("status {}: {}", status, body)));
        }

        let body: TokenResponse = response.json().await.map_err(|e| {
            CatalogError::InvalidResponse(format!("Failed to parse token response: {}", e))
        })?;

        let lifetime = Duration::from_secs(body.expires_in).saturating_sub(TOKEN_EXPIRY_MARGIN);
        info!(expires_in = body.expires_in, "Obtained catalog access token");

        Ok(AccessToken {
            value: body.access_token,
            expires_at: Instant::now() + lifetime,
        })
    }
}

#[async_trait]
impl CatalogClient for SpotifyCatalogClient {
    fn name(&self) -> &str {
        "spotify"
    }

    async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<TrackRecord>, CatalogError> {
        let limit = limit.clamp(1, MAX_SEARCH_LIMIT);
        let token = self.access_token().await?;
        let url = format!("{}/v1/search", self.api_base_url);

        debug!(query = %query, limit, "Searching catalog tracks");
        let limit_param = limit.to_string();

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("q", query),
                ("type", "track"),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await
            .map_err(CatalogError::from_reqwest)?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => {
                // Drop the cached token so the next call re-authenticates.
                self.token.lock().await.take();
                let body = response.text().await.unwrap_or_default();
                return Err(CatalogError::Auth(body));
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(CatalogError::RateLimited),
            s if !s.is_success() => {
                let body = response.text().await.unwrap_or_default();
                return Err(CatalogError::Api {
                    status: s.as_u16(),
                    message: body,
                });
            }
            _ => {}
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            CatalogError::InvalidResponse(format!("Failed to parse search response: {}", e))
        })?;

        let records: Vec<TrackRecord> = body
            .tracks
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .take(limit)
            .map(SpotifyTrack::into_record)
            .collect();

        debug!(results = records.len(), "Catalog search completed");
        Ok(records)
    }
}

// Spotify API types

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: Option<TrackPage>,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<SpotifyTrack>,
}

#[derive(Debug, Deserialize)]
struct SpotifyTrack {
    id: String,
    name: String,
    #[serde(default)]
    artists: Vec<SpotifyArtist>,
    album: Option<SpotifyAlbum>,
    preview_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpotifyArtist {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpotifyAlbum {
    #[serde(default)]
    release_date: String,
}

impl SpotifyTrack {
    fn into_record(self) -> TrackRecord {
        let artist = self.artists.into_iter().next().map(|a| a.name);
        let release_date = self.album.map(|a| a.release_date).unwrap_or_default();
        TrackRecord::from_catalog_fields(self.name, artist, &release_date, self.preview_url, self.id)
    }
}
