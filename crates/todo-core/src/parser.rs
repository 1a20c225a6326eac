//! Single-pass memory scanner.
//!
//! Two note forms are recognized:
//!
//! ~~~text
//! /remember=3 buy milk
//!
//! ```journal.remember-for=5
//! first line of a long note
//! second line
//! ```
//! ~~~
//!
//! Everything else in a document is ignored.

use chrono::NaiveDate;

use crate::constants::{FENCE, LONG_NOTE_KEY, SHORT_NOTE_TAG};
use crate::note::Note;

#[derive(Debug)]
enum ScanState {
    Outside,
    InsideLongNote { remember_for: u32, lines: Vec<String> },
}

struct Scanner {
    created_at: NaiveDate,
    state: ScanState,
    notes: Vec<Note>,
}

impl Scanner {
    fn new(created_at: NaiveDate) -> Self {
        Self {
            created_at,
            state: ScanState::Outside,
            notes: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        match &mut self.state {
            ScanState::Outside => {
                if let Some(remember_for) = long_note_start(line) {
                    self.state = ScanState::InsideLongNote {
                        remember_for,
                        lines: Vec::new(),
                    };
                } else if let Some(note) = short_note(line, self.created_at) {
                    self.notes.push(note);
                }
            }
            ScanState::InsideLongNote { lines, .. } => {
                if line.trim() == FENCE {
                    self.close_long_note();
                } else {
                    lines.push(line.to_string());
                }
            }
        }
    }

    fn close_long_note(&mut self) {
        if let ScanState::InsideLongNote {
            remember_for,
            lines,
        } = std::mem::replace(&mut self.state, ScanState::Outside)
        {
            self.notes
                .push(Note::new(lines.join("\n"), self.created_at, remember_for));
        }
    }

    /// An unterminated long note keeps whatever it accumulated.
    fn finish(mut self) -> Vec<Note> {
        self.close_long_note();
        self.notes
    }
}

/// Longest leading run of ASCII digits that fits in a `u32`.
/// Returns the value (0 when there are no digits) and the bytes consumed.
fn leading_count(s: &str) -> (u32, usize) {
    let mut value: u32 = 0;
    let mut consumed = 0;
    for b in s.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(b - b'0')))
        {
            Some(next) => {
                value = next;
                consumed += 1;
            }
            None => break,
        }
    }
    (value, consumed)
}

/// Day count of a long-note opening fence, or `None` if the line isn't one.
fn long_note_start(line: &str) -> Option<u32> {
    if !line.starts_with(FENCE) {
        return None;
    }
    let at = line.find(LONG_NOTE_KEY)?;
    let (count, _) = leading_count(&line[at + LONG_NOTE_KEY.len()..]);
    Some(count)
}

fn short_note(line: &str, created_at: NaiveDate) -> Option<Note> {
    let rest = line.strip_prefix(SHORT_NOTE_TAG)?;
    let (count, consumed) = leading_count(rest);
    Some(Note::new(rest[consumed..].trim(), created_at, count))
}

/// Extract notes, in order of appearance, from the lines of one day's document.
pub fn parse_lines<I, S>(lines: I, created_at: NaiveDate) -> Vec<Note>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new(created_at);
    for line in lines {
        scanner.feed(line.as_ref());
    }
    scanner.finish()
}

/// [`parse_lines`] over a whole document. `\r\n` endings are accepted.
pub fn parse_document(text: &str, created_at: NaiveDate) -> Vec<Note> {
    parse_lines(text.lines(), created_at)
}
