//! Mode routing: which inputs each screen shows, how they are validated,
//! and which adapter pipeline runs on submit.

mod mode;
mod outcome;
mod request;
mod router;

pub use mode::{FieldKind, FieldSpec, Mode, ModeDescriptor};
pub use outcome::{
    choose_preview, embed_url, ModeOutcome, PreviewChoice, NO_MATCHES_MESSAGE, NO_PREVIEW_MESSAGE,
};
pub use request::{ModeRequest, ValidationWarning};
pub use router::{Assistant, PREVIEW_SEARCH_LIMIT, SEARCH_LIMIT};
