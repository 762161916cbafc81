//! Client-side rules for the learner's own text.

/// Drafts longer than this are truncated, not rejected.
pub const MAX_DRAFT_WORDS: usize = 150;
/// Minimum trimmed length, in characters, of a rewrite before it can be checked.
pub const MIN_REWRITE_CHARS: usize = 50;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Result of bounding a draft to [`MAX_DRAFT_WORDS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedDraft {
    pub text: String,
    pub word_count: usize,
    pub truncated: bool,
}

/// Keep a draft within the word limit.
///
/// A draft at or under the limit is returned verbatim. Over the limit, only the
/// first [`MAX_DRAFT_WORDS`] words survive, re-joined with single spaces.
pub fn bound_draft(text: &str) -> BoundedDraft {
    let count = word_count(text);
    if count <= MAX_DRAFT_WORDS {
        return BoundedDraft {
            text: text.to_string(),
            word_count: count,
            truncated: false,
        };
    }

    let text = text
        .split_whitespace()
        .take(MAX_DRAFT_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    BoundedDraft {
        text,
        word_count: MAX_DRAFT_WORDS,
        truncated: true,
    }
}

/// Inline guidance shown instead of submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance {
    EmptyDraft,
    EmptyRewrite,
    RewriteTooShort { chars: usize },
}

impl Guidance {
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyDraft => "Write your rough draft or idea first!",
            Self::EmptyRewrite => "Write your own version first!",
            Self::RewriteTooShort { .. } => "Keep writing! You need at least 50 characters.",
        }
    }
}

pub fn check_draft(draft: &str) -> Result<(), Guidance> {
    if draft.trim().is_empty() {
        return Err(Guidance::EmptyDraft);
    }
    Ok(())
}

pub fn check_rewrite(rewrite: &str) -> Result<(), Guidance> {
    let trimmed = rewrite.trim();
    if trimmed.is_empty() {
        return Err(Guidance::EmptyRewrite);
    }
    let chars = trimmed.chars().count();
    if chars < MIN_REWRITE_CHARS {
        return Err(Guidance::RewriteTooShort { chars });
    }
    Ok(())
}
