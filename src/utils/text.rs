/// Cut `s` to at most `max_chars` characters, marking the cut with `...`.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            let truncated = &s[..idx];
            format!("{}...", truncated.trim_end())
        }
        None => s.to_string(),
    }
}

/// Single-line preview of a model reply for log fields.
#[must_use]
pub fn log_preview(s: &str, max_chars: usize) -> String {
    let flattened = s.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_with_ellipsis(&flattened, max_chars)
}
