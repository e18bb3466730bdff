//! Runs a validated mode request through its adapter pipeline.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::outcome::{choose_preview, ModeOutcome, NO_MATCHES_MESSAGE};
use super::request::ModeRequest;
use crate::catalog::{CatalogClient, CatalogError, TrackRecord};
use crate::llm::{error_text, generate_text, TextGenerator};
use crate::prompts;

/// Result cards shown by the search mode.
pub const SEARCH_LIMIT: usize = 5;

/// Tracks scanned for a playable preview.
pub const PREVIEW_SEARCH_LIMIT: usize = 10;

/// The adapters, configured once at startup and shared by every request.
pub struct Assistant {
    catalog: Arc<dyn CatalogClient>,
    generator: Arc<dyn TextGenerator>,
}

impl Assistant {
    pub fn new(catalog: Arc<dyn CatalogClient>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { catalog, generator }
    }

    /// Validates and runs one submission. Each call is independent; nothing
    /// is carried between submissions.
    ///
    /// Neither adapter's failure escapes: both end up as `Error: ...` text.
    pub async fn submit(&self, request: &ModeRequest) -> ModeOutcome {
        let mode = request.mode();
        if let Err(warning) = request.validate() {
            debug!(mode = mode.slug(), "Rejected submission: {}", warning);
            return ModeOutcome::Warning {
                message: warning.to_string(),
            };
        }
        info!(mode = mode.slug(), "Handling submission");

        match request {
            ModeRequest::Recommendations { mood, genre } => {
                let prompt = prompts::recommendation_prompt(mood, genre);
                self.generate("Here are your recommendations:", &prompt)
                    .await
            }
            ModeRequest::LyricsAnalysis { lyrics, category } => {
                let prompt = prompts::lyrics_analysis_prompt(lyrics, *category);
                self.generate("Lyrics Analysis", &prompt).await
            }
            ModeRequest::TheoryHelper { question } => {
                let prompt = prompts::theory_prompt(question);
                self.generate("Music Theory Explanation", &prompt).await
            }
            ModeRequest::Search { query } => {
                match self.search(query, SEARCH_LIMIT).await {
                    Ok(tracks) if tracks.is_empty() => ModeOutcome::NoResults {
                        message: NO_MATCHES_MESSAGE.to_string(),
                    },
                    Ok(tracks) => ModeOutcome::Tracks {
                        heading: "Search Results".to_string(),
                        tracks,
                    },
                    Err(err) => catalog_failure(err),
                }
            }
            ModeRequest::PreviewPlayer { song_name } => {
                match self.search(song_name, PREVIEW_SEARCH_LIMIT).await {
                    Ok(tracks) => choose_preview(&tracks).into(),
                    Err(err) => catalog_failure(err),
                }
            }
        }
    }

    async fn generate(&self, heading: &str, prompt: &str) -> ModeOutcome {
        let body = generate_text(self.generator.as_ref(), prompt).await;
        ModeOutcome::Text {
            heading: heading.to_string(),
            body,
        }
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<TrackRecord>, CatalogError> {
        let mut tracks = self.catalog.search_tracks(query, limit).await?;
        tracks.truncate(limit);
        debug!(
            backend = self.catalog.name(),
            results = tracks.len(),
            "Catalog search returned"
        );
        Ok(tracks)
    }
}

fn catalog_failure(err: CatalogError) -> ModeOutcome {
    warn!(error = %err, "Catalog search failed");
    ModeOutcome::Failure {
        message: error_text(err),
    }
}
