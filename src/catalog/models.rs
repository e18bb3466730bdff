use serde::{Deserialize, Serialize};

/// Genre placeholder: the catalog does not expose genres for individual tracks.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Artist placeholder for tracks the catalog lists without artists.
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Number of leading release-date characters kept as the year.
const YEAR_PREFIX_LEN: usize = 4;

/// A single search hit, normalized from the catalog's track object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    pub catalog_id: String,
}

impl TrackRecord {
    /// Builds a record from the raw catalog fields.
    ///
    /// `year` is the first four characters of `release_date`, taken whole
    /// when the date is shorter. The genre is always [`UNKNOWN_GENRE`].
    pub fn from_catalog_fields(
        title: impl Into<String>,
        artist: Option<String>,
        release_date: &str,
        preview_url: Option<String>,
        catalog_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            genre: UNKNOWN_GENRE.to_string(),
            year: year_prefix(release_date),
            preview_url: preview_url.filter(|url| !url.is_empty()),
            catalog_id: catalog_id.into(),
        }
    }

    pub fn has_preview(&self) -> bool {
        self.preview_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

fn year_prefix(release_date: &str) -> String {
    release_date.chars().take(YEAR_PREFIX_LEN).collect()
}
