//! Shape checks for parsed model replies.
//!
//! Critical fields (`vividText`, `highlights`, `overallRating`) fail the reply
//! with [`GatewayError::ResponseShape`]. Everything else is cosmetic and is
//! repaired with an empty default.

use crate::core::writing::{Feedback, Highlight, OverallRating, VividExample};
use crate::error::GatewayError;
use serde_json::Value;

pub fn vivid_example_from_value(value: &Value) -> Result<VividExample, GatewayError> {
    let vivid_text = value
        .get("vividText")
        .and_then(Value::as_str)
        .ok_or_else(|| GatewayError::ResponseShape("vividText must be a string".into()))?;
    let highlights = value
        .get("highlights")
        .and_then(Value::as_array)
        .ok_or_else(|| GatewayError::ResponseShape("highlights must be an array".into()))?;

    Ok(VividExample {
        vivid_text: vivid_text.to_string(),
        highlights: highlights.iter().filter_map(highlight_from_value).collect(),
    })
}

/// Entries without a string `text` cannot be shown and are dropped. A missing
/// `type` becomes an unknown category, which renders as plain text.
fn highlight_from_value(value: &Value) -> Option<Highlight> {
    let text = value.get("text").and_then(Value::as_str)?;
    let category = value.get("type").and_then(Value::as_str).unwrap_or_default();
    Some(Highlight::new(text, category))
}

pub fn feedback_from_value(value: &Value) -> Result<Feedback, GatewayError> {
    let rating = value
        .get("overallRating")
        .and_then(Value::as_str)
        .ok_or_else(|| GatewayError::ResponseShape("overallRating must be a string".into()))?;

    Ok(Feedback {
        similarity_score: score(value, "similarityScore"),
        vividness_score: score(value, "vividnessScore"),
        overall_rating: OverallRating::from_label(rating),
        is_too_similar: value
            .get("isTooSimilar")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        sensory_details: string_list(value, "sensoryDetails"),
        emotional_details: string_list(value, "emotionalDetails"),
        setting_details: string_list(value, "settingDetails"),
        action_details: string_list(value, "actionDetails"),
        praise: string_field(value, "praise"),
        suggestion: string_field(value, "suggestion"),
        encouragement: string_field(value, "encouragement"),
    })
}

/// Missing or non-array lists become empty; non-string items are skipped.
fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Scores are clamped to 0–100. Numeric strings are accepted.
fn score(value: &Value, key: &str) -> u8 {
    let raw = match value.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    raw.filter(|n| n.is_finite())
        .map_or(0, |n| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let clamped = n.round().clamp(0.0, 100.0) as u8;
            clamped
        })
}
