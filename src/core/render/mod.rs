//! Splits a vivid example into plain and highlighted segments for display.

use crate::core::writing::{DetailType, Highlight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Highlighted { text: &'a str, detail: DetailType },
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Self::Plain(text) | Self::Highlighted { text, .. } => *text,
        }
    }

    pub fn detail(&self) -> Option<DetailType> {
        match self {
            Self::Plain(_) => None,
            Self::Highlighted { detail, .. } => Some(*detail),
        }
    }
}

/// Partition `text` into segments according to `highlights`.
///
/// Highlights are ordered by where their text first occurs, then matched left
/// to right from a moving cursor so repeated phrases consume distinct
/// occurrences. A highlight that cannot be found past the cursor is skipped.
/// An unknown category renders as plain text.
pub fn segments<'a>(text: Option<&'a str>, highlights: Option<&[Highlight]>) -> Vec<Segment<'a>> {
    let (Some(text), Some(highlights)) = (text, highlights) else {
        return Vec::new();
    };
    if text.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&Highlight> = highlights.iter().collect();
    // Stable: equal first positions keep input order. Missing phrases sort first.
    ordered.sort_by_key(|h| text.find(h.text.as_str()));

    let mut out = Vec::with_capacity(ordered.len() * 2 + 1);
    let mut cursor = 0;

    for highlight in ordered {
        if highlight.text.is_empty() {
            continue;
        }
        let Some(offset) = text[cursor..].find(highlight.text.as_str()) else {
            continue;
        };
        let start = cursor + offset;
        let end = start + highlight.text.len();

        if start > cursor {
            out.push(Segment::Plain(&text[cursor..start]));
        }
        let matched = &text[start..end];
        out.push(match highlight.detail_type() {
            Some(detail) => Segment::Highlighted {
                text: matched,
                detail,
            },
            None => Segment::Plain(matched),
        });
        cursor = end;
    }

    if cursor < text.len() {
        out.push(Segment::Plain(&text[cursor..]));
    }

    out
}

/// Concatenate segment text back into a string.
pub fn reassemble(segments: &[Segment<'_>]) -> String {
    segments.iter().map(Segment::text).collect()
}
