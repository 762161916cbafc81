use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The four dimensions of descriptive writing a learner practises.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DetailType {
    Sensory,
    Emotional,
    Setting,
    Action,
}

impl DetailType {
    /// Resolve a category key as the model sent it. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        key.trim().parse().ok()
    }

    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// An annotated span of a vivid example.
///
/// `category` is kept exactly as received so that an unknown key can still be
/// shown as plain text instead of failing the whole example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub text: String,
    #[serde(rename = "type")]
    pub category: String,
}

impl Highlight {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    pub fn detail_type(&self) -> Option<DetailType> {
        DetailType::from_key(&self.category)
    }
}

/// The model's three-sentence rewrite of a draft with its highlights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VividExample {
    pub vivid_text: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallRating {
    Amazing,
    Great,
    Good,
    NeedsWork,
    TooSimilar,
    /// A rating label outside the known set, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

impl OverallRating {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "amazing" => Self::Amazing,
            "great" => Self::Great,
            "good" => Self::Good,
            "needs_work" => Self::NeedsWork,
            "too_similar" => Self::TooSimilar,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Amazing => "amazing",
            Self::Great => "great",
            Self::Good => "good",
            Self::NeedsWork => "needs_work",
            Self::TooSimilar => "too_similar",
            Self::Other(label) => label,
        }
    }
}

/// Critique of a learner's rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub similarity_score: u8,
    pub vividness_score: u8,
    pub overall_rating: OverallRating,
    pub is_too_similar: bool,
    pub sensory_details: Vec<String>,
    pub emotional_details: Vec<String>,
    pub setting_details: Vec<String>,
    pub action_details: Vec<String>,
    pub praise: String,
    pub suggestion: String,
    pub encouragement: String,
}

impl Feedback {
    /// The details the learner used in one category.
    pub fn details(&self, detail: DetailType) -> &[String] {
        match detail {
            DetailType::Sensory => &self.sensory_details,
            DetailType::Emotional => &self.emotional_details,
            DetailType::Setting => &self.setting_details,
            DetailType::Action => &self.action_details,
        }
    }
}
