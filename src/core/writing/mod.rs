pub mod catalog;
pub mod input;
pub mod types;

pub use catalog::{DETAIL_CATALOG, DetailInfo, RatingInfo, detail_info};
pub use input::{
    BoundedDraft, Guidance, MAX_DRAFT_WORDS, MIN_REWRITE_CHARS, bound_draft, check_draft,
    check_rewrite, word_count,
};
pub use types::{DetailType, Feedback, Highlight, OverallRating, VividExample};
