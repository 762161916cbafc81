//! Static display metadata for detail categories and feedback ratings.

use super::types::{DetailType, OverallRating};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailInfo {
    pub label: &'static str,
    pub icon: &'static str,
    /// Foreground color as a CSS hex string.
    pub color: &'static str,
    /// Background tint, the foreground color at ~19% alpha.
    pub bg_color: &'static str,
    pub description: &'static str,
}

const SENSORY: DetailInfo = DetailInfo {
    label: "Sensory Details",
    icon: "👁️",
    color: "#ec4899",
    bg_color: "#ec489930",
    description: "What you see, hear, smell, taste, or feel",
};

const EMOTIONAL: DetailInfo = DetailInfo {
    label: "Emotional Details",
    icon: "💜",
    color: "#8b5cf6",
    bg_color: "#8b5cf630",
    description: "Feelings, thoughts, and reactions",
};

const SETTING: DetailInfo = DetailInfo {
    label: "Setting Details",
    icon: "🏔️",
    color: "#06b6d4",
    bg_color: "#06b6d430",
    description: "Where and when things happen",
};

const ACTION: DetailInfo = DetailInfo {
    label: "Action Details",
    icon: "⚡",
    color: "#22c55e",
    bg_color: "#22c55e30",
    description: "Specific movements and what happens",
};

/// Catalog order, used by legends.
pub const DETAIL_CATALOG: [(DetailType, DetailInfo); 4] = [
    (DetailType::Sensory, SENSORY),
    (DetailType::Emotional, EMOTIONAL),
    (DetailType::Setting, SETTING),
    (DetailType::Action, ACTION),
];

impl DetailType {
    pub const fn info(self) -> &'static DetailInfo {
        match self {
            Self::Sensory => &SENSORY,
            Self::Emotional => &EMOTIONAL,
            Self::Setting => &SETTING,
            Self::Action => &ACTION,
        }
    }
}

/// Look up metadata by raw category key.
pub fn detail_info(key: &str) -> Option<&'static DetailInfo> {
    DetailType::from_key(key).map(DetailType::info)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingInfo {
    pub emoji: &'static str,
    pub headline: &'static str,
}

impl OverallRating {
    pub fn info(&self) -> RatingInfo {
        let (emoji, headline) = match self {
            Self::Amazing => ("🌟", "AMAZING WORK!"),
            Self::Great => ("🎉", "GREAT JOB!"),
            Self::Good => ("👍", "GOOD EFFORT!"),
            Self::NeedsWork => ("💪", "KEEP PRACTICING!"),
            Self::TooSimilar => ("🔄", "TRY AGAIN!"),
            Self::Other(_) => ("📝", "RESULTS"),
        };
        RatingInfo { emoji, headline }
    }
}
