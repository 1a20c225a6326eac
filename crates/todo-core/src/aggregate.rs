//! Carry still-alive notes from recent days into a memories block.

use std::collections::BTreeMap;
use std::convert::Infallible;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::NOTHING_TO_SEE;
use crate::note::Note;
use crate::parser::parse_document;
use crate::render::render_note;
use crate::time::format_day;

/// Supplies the text of a day's document.
///
/// `Ok(None)` means the day has no document; the aggregator skips it. Any
/// `Err` aborts the pass.
pub trait DocumentSource {
    type Error;

    fn read_day(&self, day: NaiveDate) -> Result<Option<String>, Self::Error>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    type Error = S::Error;

    fn read_day(&self, day: NaiveDate) -> Result<Option<String>, Self::Error> {
        (**self).read_day(day)
    }
}

/// In-memory documents keyed by day.
impl DocumentSource for BTreeMap<NaiveDate, String> {
    type Error = Infallible;

    fn read_day(&self, day: NaiveDate) -> Result<Option<String>, Self::Error> {
        Ok(self.get(&day).cloned())
    }
}

/// Live notes found in one past day's document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySection {
    pub day: NaiveDate,
    pub notes: Vec<Note>,
}

impl DaySection {
    fn render(&self) -> String {
        let mut out = format!("- {}\n", format_day(self.day));
        for note in &self.notes {
            out.push_str(&render_note(note));
        }
        out
    }
}

/// One section per existing document in the window, most recent day first.
///
/// The window covers `today - 1` through `today - (lookback_days - 1)`; today
/// itself is never read. Sections are kept even when none of their notes
/// survived.
pub fn collect_sections<S: DocumentSource>(
    today: NaiveDate,
    lookback_days: u32,
    source: &S,
) -> Result<Vec<DaySection>, S::Error> {
    let mut sections = Vec::new();
    for idx in 1..lookback_days {
        let Some(day) = today.checked_sub_days(Days::new(u64::from(idx))) else {
            break;
        };
        let Some(text) = source.read_day(day)? else {
            continue;
        };
        let notes = parse_document(&text, day)
            .into_iter()
            .filter(|note| note.is_alive_on(today))
            .collect();
        sections.push(DaySection { day, notes });
    }
    Ok(sections)
}

/// Rendered memories block for `today`, or [`NOTHING_TO_SEE`] when no
/// document in the window exists.
pub fn collect_memories<S: DocumentSource>(
    today: NaiveDate,
    lookback_days: u32,
    source: &S,
) -> Result<String, S::Error> {
    let sections = collect_sections(today, lookback_days, source)?;
    if sections.is_empty() {
        return Ok(NOTHING_TO_SEE.to_string());
    }
    Ok(sections.iter().map(DaySection::render).collect())
}
