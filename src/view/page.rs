//! Server-rendered page for a mode.
//!
//! Rendering is a pure function of the selected mode, the current input
//! values and the last outcome.

use super::escape::escape_html;
use super::markdown::render_markdown;
use crate::assistant::{FieldKind, FieldSpec, Mode, ModeOutcome, ModeRequest};
use crate::catalog::TrackRecord;

pub const PAGE_TITLE: &str = "AI Music Assistant";
const TAGLINE: &str =
    "Discover music, get recommendations, and learn about music theory with AI!";
const FOOTER: &str = "AI Music Assistant powered by Gemini and Spotify";

const STYLE: &str = r#"
    body {
        margin: 0;
        background: linear-gradient(135deg, #f0f4f7, #e0eafc, #cfdef3);
        font-family: 'Segoe UI', sans-serif;
        color: #1d1d1d;
        min-height: 100vh;
    }
    .layout { display: flex; min-height: 100vh; }
    nav.sidebar {
        width: 240px;
        padding: 24px 16px;
        background-color: rgba(255, 255, 255, 0.6);
        border-right: 1px solid rgba(0, 0, 0, 0.08);
    }
    nav.sidebar a {
        display: block;
        padding: 8px 12px;
        margin-bottom: 4px;
        border-radius: 8px;
        color: #1d1d1d;
        text-decoration: none;
    }
    nav.sidebar a.active { background-color: #4CAF50; color: white; font-weight: bold; }
    main { flex: 1; padding: 32px 48px; max-width: 960px; }
    label { display: block; margin: 16px 0 6px; }
    input[type=text], textarea, select {
        width: 100%;
        box-sizing: border-box;
        background-color: rgba(255, 255, 255, 0.9);
        color: #000;
        border: 1px solid #ccc;
        border-radius: 10px;
        padding: 8px;
        font: inherit;
    }
    button {
        margin-top: 16px;
        background-color: #4CAF50;
        color: white;
        border: none;
        border-radius: 10px;
        padding: 10px 24px;
        font-weight: bold;
        cursor: pointer;
        transition: 0.3s;
    }
    button:hover { background-color: #388e3c; transform: scale(1.05); }
    .warning {
        margin-top: 16px;
        padding: 12px 16px;
        border-radius: 10px;
        background-color: #fff4d6;
        border: 1px solid #f2c94c;
    }
    .error {
        margin-top: 16px;
        padding: 12px 16px;
        border-radius: 10px;
        background-color: #fde2e1;
        border: 1px solid #eb5757;
    }
    .generated { line-height: 1.5; }
    .music-card {
        background-color: rgba(255, 255, 255, 0.85);
        color: black;
        border-radius: 15px;
        padding: 20px;
        margin-bottom: 20px;
        box-shadow: 0 6px 12px rgba(0, 0, 0, 0.1);
        transition: 0.3s;
    }
    .music-card:hover { transform: scale(1.01); }
    footer { margin-top: 48px; text-align: center; color: gray; }
    @keyframes floatNotes {
        0% { transform: translateY(100vh) rotate(0deg); opacity: 0; }
        50% { opacity: 1; }
        100% { transform: translateY(-10vh) rotate(360deg); opacity: 0; }
    }
    .note {
        position: fixed;
        color: #ff69b4;
        font-size: 24px;
        animation: floatNotes 10s linear infinite;
        pointer-events: none;
    }
    .note:nth-child(1) { left: 5%; animation-delay: 0s; }
    .note:nth-child(2) { left: 25%; animation-delay: 2s; }
    .note:nth-child(3) { left: 45%; animation-delay: 4s; }
    .note:nth-child(4) { left: 65%; animation-delay: 6s; }
    .note:nth-child(5) { left: 85%; animation-delay: 8s; }
"#;

const NOTES: &str = r#"<div class="notes"><div class="note">🎵</div><div class="note">🎶</div><div class="note">🎼</div><div class="note">🎵</div><div class="note">🎶</div></div>"#;

/// Renders the full page for `mode`. With no `request`, inputs start empty.
pub fn render_page(
    mode: Mode,
    request: Option<&ModeRequest>,
    outcome: Option<&ModeOutcome>,
) -> String {
    let empty;
    let request = match request {
        Some(r) if r.mode() == mode => r,
        _ => {
            empty = ModeRequest::empty(mode);
            &empty
        }
    };

    let fields: String = mode
        .fields()
        .iter()
        .map(|field| render_field(field, request.value(field.name).unwrap_or_default()))
        .collect();

    let blurb = mode
        .blurb()
        .map(|b| format!("<p>{}</p>", escape_html(b)))
        .unwrap_or_default();

    let result = outcome.map(render_outcome).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
{notes}
<div class="layout">
    {nav}
    <main>
        <h1>🎵 {title}</h1>
        <p>{tagline}</p>
        <h2>{header}</h2>
        <form method="post" action="/mode/{slug}">
            {fields}
            {blurb}
            <button type="submit">{submit}</button>
        </form>
        <section class="result">{result}</section>
        <hr>
        <footer><p>{footer}</p></footer>
    </main>
</div>
</body>
</html>
"#,
        title = PAGE_TITLE,
        style = STYLE,
        notes = NOTES,
        nav = render_nav(mode),
        tagline = TAGLINE,
        header = escape_html(mode.header()),
        slug = mode.slug(),
        fields = fields,
        blurb = blurb,
        submit = escape_html(mode.submit_label()),
        result = result,
        footer = FOOTER,
    )
}

fn render_nav(current: Mode) -> String {
    let links: String = Mode::ALL
        .iter()
        .map(|mode| {
            let class = if *mode == current { " class=\"active\"" } else { "" };
            format!(
                "<a href=\"/mode/{}\"{}>{}</a>",
                mode.slug(),
                class,
                escape_html(mode.label())
            )
        })
        .collect();
    format!(
        "<nav class=\"sidebar\"><h3>Navigation</h3><p>Choose a feature:</p>{}</nav>",
        links
    )
}

fn render_field(field: &FieldSpec, value: &str) -> String {
    let label = format!(
        "<label for=\"{name}\">{label}</label>",
        name = field.name,
        label = escape_html(field.label)
    );
    let input = match field.kind {
        FieldKind::Text => format!(
            "<input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\">",
            name = field.name,
            value = escape_html(value)
        ),
        FieldKind::TextArea { rows } => format!(
            "<textarea id=\"{name}\" name=\"{name}\" rows=\"{rows}\">{value}</textarea>",
            name = field.name,
            rows = rows,
            value = escape_html(value)
        ),
        FieldKind::Select { options } => {
            let options: String = options
                .iter()
                .map(|option| {
                    let selected = if *option == value { " selected" } else { "" };
                    format!(
                        "<option value=\"{v}\"{selected}>{v}</option>",
                        v = escape_html(option),
                        selected = selected
                    )
                })
                .collect();
            format!(
                "<select id=\"{name}\" name=\"{name}\">{options}</select>",
                name = field.name,
                options = options
            )
        }
    };
    format!("{}{}", label, input)
}

pub fn render_outcome(outcome: &ModeOutcome) -> String {
    match outcome {
        ModeOutcome::Warning { message } | ModeOutcome::NoResults { message } => {
            format!("<div class=\"warning\">{}</div>", escape_html(message))
        }
        ModeOutcome::Failure { message } => {
            format!("<div class=\"error\">{}</div>", escape_html(message))
        }
        ModeOutcome::Text { heading, body } => format!(
            "<h3>{}</h3><div class=\"generated\">{}</div>",
            escape_html(heading),
            render_markdown(body)
        ),
        ModeOutcome::Tracks { heading, tracks } => {
            let cards: String = tracks
                .iter()
                .enumerate()
                .map(|(idx, track)| render_track_card(idx + 1, track))
                .collect();
            format!("<h3>{}</h3>{}", escape_html(heading), cards)
        }
        ModeOutcome::PreviewAudio {
            title,
            artist,
            preview_url,
        } => format!(
            "<h3>{} by {}</h3><audio controls src=\"{}\" type=\"audio/mp3\"></audio>",
            escape_html(title),
            escape_html(artist),
            escape_html(preview_url)
        ),
        ModeOutcome::PreviewEmbed {
            message, embed_url, ..
        } => format!(
            "<div class=\"warning\">{}</div>\
             <iframe src=\"{}\" width=\"300\" height=\"80\" frameborder=\"0\" \
             allowtransparency=\"true\" allow=\"encrypted-media\"></iframe>",
            escape_html(message),
            escape_html(embed_url)
        ),
    }
}

fn render_track_card(position: usize, track: &TrackRecord) -> String {
    format!(
        "<div class=\"music-card\"><h3>{}. {}</h3>\
         <p><strong>Artist:</strong> {}</p>\
         <p><strong>Genre:</strong> {}</p>\
         <p><strong>Year:</strong> {}</p></div>",
        position,
        escape_html(&track.title),
        escape_html(&track.artist),
        escape_html(&track.genre),
        escape_html(&track.year)
    )
}
