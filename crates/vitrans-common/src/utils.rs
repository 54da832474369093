//! Shared utility functions.

/// Truncates a string to at most `max_chars` characters, appending an
/// ellipsis marker when anything was cut.
///
/// The cut counts Unicode scalar values, not bytes: site content is
/// Vietnamese, and a byte cut would split multi-byte code points.
/// There is no word-boundary awareness.
pub fn truncate_chars(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }
    let cut: String = input.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Returns the trimmed value if it is non-empty, `None` otherwise.
pub fn trimmed_non_empty(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
