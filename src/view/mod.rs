//! HTML rendering for the assistant's single screen.

mod escape;
mod markdown;
mod page;

pub use escape::escape_html;
pub use markdown::render_markdown;
pub use page::{render_outcome, render_page, PAGE_TITLE};
