//! Prompt templates, one per generative mode.

use serde::{Deserialize, Serialize};

/// What part of a song's lyrics to analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AnalysisCategory {
    #[default]
    #[serde(rename = "Overall Meaning")]
    OverallMeaning,
    #[serde(rename = "Themes")]
    Themes,
    #[serde(rename = "Literary Devices")]
    LiteraryDevices,
    #[serde(rename = "Emotional Tone")]
    EmotionalTone,
}

impl AnalysisCategory {
    pub const ALL: [AnalysisCategory; 4] = [
        AnalysisCategory::OverallMeaning,
        AnalysisCategory::Themes,
        AnalysisCategory::LiteraryDevices,
        AnalysisCategory::EmotionalTone,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            AnalysisCategory::OverallMeaning => "Overall Meaning",
            AnalysisCategory::Themes => "Themes",
            AnalysisCategory::LiteraryDevices => "Literary Devices",
            AnalysisCategory::EmotionalTone => "Emotional Tone",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl std::fmt::Display for AnalysisCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

const RECOMMENDATION_SUFFIX: &str =
    ". Include diverse artists. Format as a numbered list with artist names.";

/// Asks for five songs matching a mood, optionally narrowed to a genre.
///
/// Callers make sure at least one of the two is non-empty.
pub fn recommendation_prompt(mood: &str, genre: &str) -> String {
    let mut prompt = format!("Recommend 5 songs for someone who is feeling {}", mood);
    if !genre.is_empty() {
        prompt.push_str(&format!(" and likes {} music", genre));
    }
    prompt.push_str(RECOMMENDATION_SUFFIX);
    prompt
}

pub fn lyrics_analysis_prompt(lyrics: &str, category: AnalysisCategory) -> String {
    format!(
        "Analyze these song lyrics for {}:\n\n{}\n\nProvide a detailed analysis.",
        category.label().to_lowercase(),
        lyrics
    )
}

pub fn theory_prompt(question: &str) -> String {
    format!(
        "Explain this music theory concept in simple terms with examples: {}",
        question
    )
}
