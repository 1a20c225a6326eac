//! Memory engine for daily todo documents.
//!
//! A day document may carry notes tagged with an expiration. Recent days are
//! scanned for notes that are still alive, and the survivors are rendered into
//! the "Memories" section of a new day document.
//!
//! Zero I/O — documents are supplied through [`DocumentSource`].

pub mod aggregate;
pub mod constants;
pub mod note;
pub mod parser;
pub mod render;
pub mod template;
pub mod time;

pub use aggregate::{DaySection, DocumentSource, collect_memories, collect_sections};
pub use constants::{
    DAY_FORMAT, DEFAULT_LOOKBACK_DAYS, FENCE, LONG_NOTE_KEY, NOTHING_TO_SEE, SHORT_NOTE_TAG,
};
pub use note::Note;
pub use parser::{parse_document, parse_lines};
pub use render::render_note;
pub use template::compose_day_document;
pub use time::{format_day, parse_day, today};
