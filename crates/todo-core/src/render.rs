use crate::note::Note;

/// Format a note for the "Memories" section of a day document.
///
/// Single-line notes become list items under the day header; multi-line notes
/// become an indented block quote set off by blank lines:
///
/// ```text
/// - 2019-05-15
///   - short memory
///
///     > long memory start
///     > long memory end
///
///   - short memory
/// ```
///
/// Rendering is presentation only. The output carries no tags, so feeding it
/// back through the parser yields no notes.
pub fn render_note(note: &Note) -> String {
    if note.line_count() > 1 {
        let mut block = String::from("\n");
        for line in note.content.split('\n') {
            block.push_str("    > ");
            block.push_str(line);
            block.push('\n');
        }
        block.push('\n');
        block
    } else {
        format!("  - {}\n", note.content)
    }
}
