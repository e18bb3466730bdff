use serde::Serialize;

use crate::catalog::TrackRecord;

pub const NO_MATCHES_MESSAGE: &str = "No matching tracks found.";
pub const NO_PREVIEW_MESSAGE: &str =
    "No preview available for this track. But you can listen on Spotify:";

const EMBED_BASE_URL: &str = "https://open.spotify.com/embed/track/";

/// What the view shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModeOutcome {
    /// A required input was missing; nothing was sent anywhere.
    Warning { message: String },
    /// Informational: the lookup ran but found nothing.
    NoResults { message: String },
    /// Generated text. Generation failures also land here as `Error: ...`.
    Text { heading: String, body: String },
    /// Search result cards.
    Tracks {
        heading: String,
        tracks: Vec<TrackRecord>,
    },
    /// A playable preview clip.
    PreviewAudio {
        title: String,
        artist: String,
        preview_url: String,
    },
    /// No clip available, fall back to the catalog's embeddable player.
    PreviewEmbed {
        message: String,
        catalog_id: String,
        embed_url: String,
    },
    /// The catalog lookup failed, as `Error: ...`.
    Failure { message: String },
}

impl ModeOutcome {
    pub fn is_warning(&self) -> bool {
        matches!(self, ModeOutcome::Warning { .. })
    }
}

pub fn embed_url(catalog_id: &str) -> String {
    format!("{}{}", EMBED_BASE_URL, urlencoding::encode(catalog_id))
}

/// Which track the preview player should show.
#[derive(Debug, PartialEq, Eq)]
pub enum PreviewChoice<'a> {
    /// First track, in search order, carrying a preview clip.
    Audio(&'a TrackRecord),
    /// None has a clip; embed the first match instead.
    Embed(&'a TrackRecord),
    NoMatch,
}

pub fn choose_preview(tracks: &[TrackRecord]) -> PreviewChoice<'_> {
    if let Some(track) = tracks.iter().find(|t| t.has_preview()) {
        return PreviewChoice::Audio(track);
    }
    match tracks.first() {
        Some(first) => PreviewChoice::Embed(first),
        None => PreviewChoice::NoMatch,
    }
}

impl From<PreviewChoice<'_>> for ModeOutcome {
    fn from(choice: PreviewChoice<'_>) -> Self {
        match choice {
            PreviewChoice::Audio(track) => ModeOutcome::PreviewAudio {
                title: track.title.clone(),
                artist: track.artist.clone(),
                preview_url: track.preview_url.clone().unwrap_or_default(),
            },
            PreviewChoice::Embed(track) => ModeOutcome::PreviewEmbed {
                message: NO_PREVIEW_MESSAGE.to_string(),
                catalog_id: track.catalog_id.clone(),
                embed_url: embed_url(&track.catalog_id),
            },
            PreviewChoice::NoMatch => ModeOutcome::NoResults {
                message: NO_MATCHES_MESSAGE.to_string(),
            },
        }
    }
}
