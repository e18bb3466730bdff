//! Markdown rendering for generated answers.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

fn is_blocked_url(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    BLOCKED_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

fn neutralize(event: Event<'_>) -> Event<'_> {
    match event {
        // Raw HTML in the model's answer is shown as text, never injected.
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_blocked_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if is_blocked_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    }
}

/// Renders generated text as HTML. Formatting is kept; markup is escaped.
pub fn render_markdown(text: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(text, options).map(neutralize);
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
