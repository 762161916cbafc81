use std::borrow::Cow;

use super::text::truncate_with_ellipsis;

/// Upstream error bodies are capped at this many characters before they are
/// logged or relayed to a learner.
pub const MAX_ERROR_CHARS: usize = 200;

const REDACTED: &str = "[REDACTED]";

/// Key prefixes that are followed directly by the secret.
const KEY_PREFIXES: [&str; 3] = ["sk-ant-", "sk-", "Bearer "];

/// Header/query/json markers whose value is a secret.
const VALUE_MARKERS: [&str; 6] = [
    "x-api-key: ",
    "\"x-api-key\":\"",
    "api_key=",
    "\"api_key\":\"",
    "access_token=",
    "\"access_token\":\"",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

/// Byte offset just past the secret token that starts at `from`.
fn token_end(input: &str, from: usize) -> usize {
    input[from..]
        .char_indices()
        .find(|&(_, c)| !is_secret_char(c))
        .map_or(input.len(), |(i, _)| from + i)
}

fn redact_after(scrubbed: &mut String, marker: &str) {
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(marker) {
        let start = search_from + rel;
        let value_start = start + marker.len();
        let end = token_end(scrubbed, value_start);

        // A bare marker with nothing after it is not a leak.
        if end == value_start {
            search_from = value_start;
            continue;
        }

        scrubbed.replace_range(start..end, REDACTED);
        search_from = start + REDACTED.len();
    }
}

/// Redact API keys and tokens from text bound for logs or learners.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    let needs_scrub = KEY_PREFIXES
        .iter()
        .chain(VALUE_MARKERS.iter())
        .any(|pattern| input.contains(pattern));
    if !needs_scrub {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in KEY_PREFIXES.iter().chain(VALUE_MARKERS.iter()) {
        redact_after(&mut scrubbed, marker);
    }
    Cow::Owned(scrubbed)
}

/// Scrub secrets, then cap the length.
pub fn sanitize_api_error(input: &str) -> String {
    truncate_with_ellipsis(&scrub_secret_patterns(input), MAX_ERROR_CHARS)
}
