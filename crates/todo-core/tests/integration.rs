//! End-to-end tests over the full memory pipeline:
//! day documents → parse → filter → render → day template.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use todo_core::{
    NOTHING_TO_SEE, Note, collect_memories, collect_sections, compose_day_document,
    parse_document, parse_lines, render_note,
};

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 5, 15).unwrap()
}

fn plus(day: NaiveDate, n: u64) -> NaiveDate {
    day.checked_add_days(Days::new(n)).unwrap()
}

fn one_doc(day: NaiveDate, text: &str) -> BTreeMap<NaiveDate, String> {
    BTreeMap::from([(day, text.to_string())])
}

const JOURNAL: &str = "\
# Memories

...nothing to see here...

# On the past

Met with the landlord, the radiator is still broken.

# On today

- [ ] call plumber
/remember=3 buy milk
```journal.remember-for=5
line one
line two
```
```rust
// an ordinary code block stays a code block
```
/remember=0 gone tomorrow
";

/// Scenario A: a 3-day note is shown up to the day before it expires.
#[test]
fn short_note_visibility_window() {
    let source = one_doc(base(), "/remember=3 buy milk");

    let on_d2 = collect_memories(plus(base(), 2), 7, &source).unwrap();
    assert_eq!(on_d2, "- 2019-05-15\n  - buy milk\n");

    let on_d3 = collect_memories(plus(base(), 3), 7, &source).unwrap();
    assert!(!on_d3.contains("buy milk"), "expires_at == today is excluded");

    let on_d4 = collect_memories(plus(base(), 4), 7, &source).unwrap();
    assert!(!on_d4.contains("buy milk"));
}

/// Scenario B: a fenced note becomes a four-line quote block.
#[test]
fn long_note_renders_as_block() {
    let notes = parse_document(
        "```lang.remember-for=5\nline one\nline two\n```",
        base(),
    );
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "line one\nline two");
    assert_eq!(notes[0].expires_at, plus(base(), 5));

    let rendered = render_note(&notes[0]);
    assert_eq!(rendered, "\n    > line one\n    > line two\n\n");
    assert_eq!(rendered.lines().count(), 4);
}

/// Scenario C: a count without digits falls back to zero and keeps the text.
#[test]
fn malformed_count_degrades_to_zero() {
    let notes = parse_document("/remember=abc note text", base());
    assert_eq!(notes, vec![Note::new("abc note text", base(), 0)]);
    assert!(!notes[0].is_alive_on(base()));
}

#[test]
fn full_day_document_roundtrip() {
    let yesterday = plus(base(), 1);
    let today = plus(base(), 2);
    let mut source = one_doc(base(), JOURNAL);
    source.insert(yesterday, "/remember=1 only today\n".to_string());

    let memories = collect_memories(today, 7, &source).unwrap();
    let doc = compose_day_document(&memories);

    assert_eq!(
        doc,
        "# Memories\n\n\
         - 2019-05-16\n\
         - 2019-05-15\n\
         \x20 - buy milk\n\
         \n\
         \x20   > line one\n\
         \x20   > line two\n\
         \n\
         \n\
         # On the past\n\n\n\
         # On today\n\n\n"
    );
}

#[test]
fn new_document_carries_no_memories_forward() {
    // Rendered memories are presentation only, so a freshly written day
    // document contributes nothing when it is itself looked back on.
    let today = plus(base(), 2);
    let memories = collect_memories(today, 7, &one_doc(base(), JOURNAL)).unwrap();
    let written = compose_day_document(&memories);

    let tomorrow = plus(today, 1);
    let sections = collect_sections(tomorrow, 2, &one_doc(today, &written)).unwrap();
    assert_eq!(sections.len(), 1);
    assert!(sections[0].notes.is_empty());
}

#[test]
fn empty_window_composes_placeholder_document() {
    let memories = collect_memories(base(), 7, &BTreeMap::new()).unwrap();
    assert_eq!(memories, NOTHING_TO_SEE);
    assert!(compose_day_document(&memories).contains("\n...nothing to see here...\n\n# On the past"));
}

#[test]
fn sections_serialize_for_json_output() {
    let source = one_doc(base(), "/remember=3 buy milk");
    let sections = collect_sections(plus(base(), 1), 7, &source).unwrap();
    let json = serde_json::to_value(&sections).unwrap();
    assert_eq!(json[0]["day"], "2019-05-15");
    assert_eq!(json[0]["notes"][0]["content"], "buy milk");
    assert_eq!(json[0]["notes"][0]["expires_at"], "2019-05-18");
}

proptest! {
    #[test]
    fn short_note_count_and_content(n in 0u32..10_000, text in "[a-z][a-z ]{0,30}[a-z]") {
        let line = format!("/remember={n} {text}  ");
        let notes = parse_lines([line.as_str()], base());
        prop_assert_eq!(notes.len(), 1);
        prop_assert_eq!(&notes[0].content, text.trim());
        prop_assert_eq!(notes[0].expires_at, plus(base(), u64::from(n)));
    }

    #[test]
    fn fenced_content_is_interior_lines(
        n in 0u32..400,
        body in proptest::collection::vec("[^`\r\n]{0,20}", 0..8),
    ) {
        let mut lines = vec![format!("```memo.remember-for={n}")];
        lines.extend(body.iter().cloned());
        lines.push("```".to_string());

        let notes = parse_lines(&lines, base());
        prop_assert_eq!(notes.len(), 1);
        prop_assert_eq!(&notes[0].content, &body.join("\n"));
        prop_assert!(notes[0].expires_at >= notes[0].created_at);
    }

    #[test]
    fn liveness_matches_expiry(n in 0u32..30, offset in 1u64..30) {
        let source = one_doc(base(), &format!("/remember={n} item"));
        let today = plus(base(), offset);
        let sections = collect_sections(today, 31, &source).unwrap();
        let alive = sections[0].notes.len() == 1;
        prop_assert_eq!(alive, u64::from(n) > offset);
    }

    #[test]
    fn parser_is_total(doc in "(?s).{0,200}") {
        let _ = parse_document(&doc, base());
    }
}
