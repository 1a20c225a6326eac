/// Compose a fresh day document around a rendered memories block.
pub fn compose_day_document(memories: &str) -> String {
    let mut block = memories.to_string();
    if !block.ends_with('\n') {
        block.push('\n');
    }
    format!("# Memories\n\n{block}\n# On the past\n\n\n# On today\n\n\n")
}
