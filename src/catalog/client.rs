//! Catalog client abstraction.

use async_trait::async_trait;
use thiserror::Error;

use super::models::TrackRecord;

/// Errors returned by catalog backends.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog credentials are not configured ({0})")]
    MissingCredentials(&'static str),

    #[error("catalog authentication failed: {0}")]
    Auth(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("request timed out")]
    Timeout,

    #[error("rate limited by catalog")]
    RateLimited,

    #[error("catalog API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid catalog response: {0}")]
    InvalidResponse(String),
}

impl CatalogError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout
        } else {
            CatalogError::Connection(err.without_url().to_string())
        }
    }
}

/// A music catalog that can be searched for tracks.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Short backend name, used in logs.
    fn name(&self) -> &str;

    /// Search for tracks matching `query`, returning at most `limit` records
    /// in the catalog's relevance order. An empty result is not an error.
    async fn search_tracks(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<TrackRecord>, CatalogError>;
}
