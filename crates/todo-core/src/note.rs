use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A remembered item extracted from one day's document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    pub created_at: NaiveDate,
    pub expires_at: NaiveDate,
}

impl Note {
    /// `remember_for` days after `created_at`; saturates at the last
    /// representable date so `expires_at >= created_at` always holds.
    pub fn new(content: impl Into<String>, created_at: NaiveDate, remember_for: u32) -> Self {
        let expires_at = created_at
            .checked_add_days(Days::new(u64::from(remember_for)))
            .unwrap_or(NaiveDate::MAX);
        Self {
            content: content.into(),
            created_at,
            expires_at,
        }
    }

    /// Whether the note still shows up in a document written on `today`.
    pub fn is_alive_on(&self, today: NaiveDate) -> bool {
        self.expires_at > today
    }

    /// Number of content lines (a single-line note has one).
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }
}
