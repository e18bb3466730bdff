//! Per-mode input values and their validation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::mode::Mode;
use crate::prompts::AnalysisCategory;

/// Field values submitted for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ModeRequest {
    Recommendations {
        #[serde(default)]
        mood: String,
        #[serde(default)]
        genre: String,
    },
    Search {
        #[serde(default)]
        query: String,
    },
    #[serde(rename = "lyrics")]
    LyricsAnalysis {
        #[serde(default)]
        lyrics: String,
        #[serde(default)]
        category: AnalysisCategory,
    },
    #[serde(rename = "theory")]
    TheoryHelper {
        #[serde(default)]
        question: String,
    },
    #[serde(rename = "preview")]
    PreviewPlayer {
        #[serde(default)]
        song_name: String,
    },
}

/// A required field was left empty; no backend call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationWarning(pub &'static str);

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl ModeRequest {
    /// The initial, empty state of a mode.
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Recommendations => ModeRequest::Recommendations {
                mood: String::new(),
                genre: String::new(),
            },
            Mode::Search => ModeRequest::Search {
                query: String::new(),
            },
            Mode::LyricsAnalysis => ModeRequest::LyricsAnalysis {
                lyrics: String::new(),
                category: AnalysisCategory::default(),
            },
            Mode::TheoryHelper => ModeRequest::TheoryHelper {
                question: String::new(),
            },
            Mode::PreviewPlayer => ModeRequest::PreviewPlayer {
                song_name: String::new(),
            },
        }
    }

    /// Builds a request from submitted form fields. Unknown fields are ignored
    /// and missing ones are empty; an unrecognized category falls back to the
    /// default one.
    pub fn from_form(mode: Mode, form: &HashMap<String, String>) -> Self {
        let field = |name: &str| form.get(name).cloned().unwrap_or_default();
        match mode {
            Mode::Recommendations => ModeRequest::Recommendations {
                mood: field("mood"),
                genre: field("genre"),
            },
            Mode::Search => ModeRequest::Search {
                query: field("query"),
            },
            Mode::LyricsAnalysis => ModeRequest::LyricsAnalysis {
                lyrics: field("lyrics"),
                category: form
                    .get("category")
                    .and_then(|c| AnalysisCategory::from_label(c))
                    .unwrap_or_default(),
            },
            Mode::TheoryHelper => ModeRequest::TheoryHelper {
                question: field("question"),
            },
            Mode::PreviewPlayer => ModeRequest::PreviewPlayer {
                song_name: field("song_name"),
            },
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            ModeRequest::Recommendations { .. } => Mode::Recommendations,
            ModeRequest::Search { .. } => Mode::Search,
            ModeRequest::LyricsAnalysis { .. } => Mode::LyricsAnalysis,
            ModeRequest::TheoryHelper { .. } => Mode::TheoryHelper,
            ModeRequest::PreviewPlayer { .. } => Mode::PreviewPlayer,
        }
    }

    /// Current value of the named input, for re-rendering the form.
    pub fn value(&self, field: &str) -> Option<&str> {
        match (self, field) {
            (ModeRequest::Recommendations { mood, .. }, "mood") => Some(mood.as_str()),
            (ModeRequest::Recommendations { genre, .. }, "genre") => Some(genre.as_str()),
            (ModeRequest::Search { query }, "query") => Some(query.as_str()),
            (ModeRequest::LyricsAnalysis { lyrics, .. }, "lyrics") => Some(lyrics.as_str()),
            (ModeRequest::LyricsAnalysis { category, .. }, "category") => Some(category.label()),
            (ModeRequest::TheoryHelper { question }, "question") => Some(question.as_str()),
            (ModeRequest::PreviewPlayer { song_name }, "song_name") => Some(song_name.as_str()),
            _ => None,
        }
    }

    /// Checks required fields. A field counts as empty when it is blank
    /// after trimming.
    pub fn validate(&self) -> Result<(), ValidationWarning> {
        match self {
            ModeRequest::Recommendations { mood, genre } => {
                if is_blank(mood) && is_blank(genre) {
                    return Err(ValidationWarning(
                        "Please provide at least a mood or genre for recommendations.",
                    ));
                }
            }
            ModeRequest::Search { query } => {
                if is_blank(query) {
                    return Err(ValidationWarning("Please enter a search query."));
                }
            }
            ModeRequest::LyricsAnalysis { lyrics, .. } => {
                if is_blank(lyrics) {
                    return Err(ValidationWarning("Please paste some lyrics to analyze."));
                }
            }
            ModeRequest::TheoryHelper { question } => {
                if is_blank(question) {
                    return Err(ValidationWarning("Please enter a music theory question."));
                }
            }
            ModeRequest::PreviewPlayer { song_name } => {
                if is_blank(song_name) {
                    return Err(ValidationWarning("Please enter a song name."));
                }
            }
        }
        Ok(())
    }
}
