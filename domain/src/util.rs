//! Shared utility functions.

/// Shorten text for log lines to at most `max_chars` characters.
///
/// Newlines are flattened so a preview always fits on one line; an ellipsis
/// marks truncation.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut out: String = flat.chars().take(max_chars).collect();
    out.push('…');
    out
}
