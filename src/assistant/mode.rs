//! The five feature screens and what each one shows.

use serde::Serialize;

use crate::prompts::AnalysisCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Recommendations,
    Search,
    #[serde(rename = "lyrics")]
    LyricsAnalysis,
    #[serde(rename = "theory")]
    TheoryHelper,
    #[serde(rename = "preview")]
    PreviewPlayer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextArea { rows: u16 },
    Select { options: &'static [&'static str] },
}

/// An input widget shown for a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
}

const CATEGORY_LABELS: &[&str] = &[
    AnalysisCategory::OverallMeaning.label(),
    AnalysisCategory::Themes.label(),
    AnalysisCategory::LiteraryDevices.label(),
    AnalysisCategory::EmotionalTone.label(),
];

const RECOMMENDATION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "mood",
        label: "How are you feeling or what mood are you in? (e.g., happy, relaxed, energetic)",
        kind: FieldKind::Text,
    },
    FieldSpec {
        name: "genre",
        label: "Any specific genre you prefer? (e.g., rock, jazz, hip-hop)",
        kind: FieldKind::Text,
    },
];

const SEARCH_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "query",
    label: "Enter your search query:",
    kind: FieldKind::Text,
}];

const LYRICS_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "lyrics",
        label: "Paste song lyrics here:",
        kind: FieldKind::TextArea { rows: 10 },
    },
    FieldSpec {
        name: "category",
        label: "What would you like to analyze?",
        kind: FieldKind::Select {
            options: CATEGORY_LABELS,
        },
    },
];

const THEORY_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "question",
    label: "Ask a music theory question",
    kind: FieldKind::Text,
}];

const PREVIEW_FIELDS: &[FieldSpec] = &[FieldSpec {
    name: "song_name",
    label: "Enter the name of a song to preview:",
    kind: FieldKind::Text,
}];

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Recommendations,
        Mode::Search,
        Mode::LyricsAnalysis,
        Mode::TheoryHelper,
        Mode::PreviewPlayer,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Mode::Recommendations => "recommendations",
            Mode::Search => "search",
            Mode::LyricsAnalysis => "lyrics",
            Mode::TheoryHelper => "theory",
            Mode::PreviewPlayer => "preview",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Mode> {
        Self::ALL.into_iter().find(|m| m.slug() == slug)
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Recommendations => "Music Recommendations",
            Mode::Search => "Music Search",
            Mode::LyricsAnalysis => "Lyrics Analysis",
            Mode::TheoryHelper => "Music Theory Helper",
            Mode::PreviewPlayer => "Play a Song Preview",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Mode::Recommendations => "🎧 Personalized Music Recommendations",
            Mode::Search => "🔍 Music Search",
            Mode::LyricsAnalysis => "📝 Lyrics Analysis",
            Mode::TheoryHelper => "🎼 Music Theory Helper",
            Mode::PreviewPlayer => "▶️ Play a Song Preview",
        }
    }

    /// Optional helper text shown under the inputs.
    pub fn blurb(&self) -> Option<&'static str> {
        match self {
            Mode::TheoryHelper => {
                Some("Get help with music theory concepts, chord progressions, and more")
            }
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Mode::Recommendations => "Get Recommendations",
            Mode::Search => "Search",
            Mode::LyricsAnalysis => "Analyze Lyrics",
            Mode::TheoryHelper => "Get Answer",
            Mode::PreviewPlayer => "Play Preview",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Mode::Recommendations => RECOMMENDATION_FIELDS,
            Mode::Search => SEARCH_FIELDS,
            Mode::LyricsAnalysis => LYRICS_FIELDS,
            Mode::TheoryHelper => THEORY_FIELDS,
            Mode::PreviewPlayer => PREVIEW_FIELDS,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// JSON description of a mode, served to API clients.
#[derive(Debug, Serialize)]
pub struct ModeDescriptor {
    pub mode: Mode,
    pub label: &'static str,
    pub header: &'static str,
    pub submit_label: &'static str,
    pub fields: &'static [FieldSpec],
}

impl From<Mode> for ModeDescriptor {
    fn from(mode: Mode) -> Self {
        ModeDescriptor {
            mode,
            label: mode.label(),
            header: mode.header(),
            submit_label: mode.submit_label(),
            fields: mode.fields(),
        }
    }
}
