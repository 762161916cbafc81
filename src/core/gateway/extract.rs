use crate::error::GatewayError;
use serde_json::Value;

/// The greedy object span: first `{` through last `}`.
///
/// Covers replies wrapped in Markdown fences or surrounded by commentary.
pub fn json_object_span(text: &str) -> Option<&str> {
    let open = text.find('{')?;
    let close = text.rfind('}')?;
    (close > open).then(|| &text[open..=close])
}

/// Parse the JSON object embedded in a raw model reply.
pub fn extract_json_object(text: &str) -> Result<Value, GatewayError> {
    let span = json_object_span(text)
        .ok_or_else(|| GatewayError::MalformedResponse("no JSON object in reply".into()))?;
    let value: Value = serde_json::from_str(span)
        .map_err(|e| GatewayError::MalformedResponse(format!("invalid JSON: {e}")))?;
    if !value.is_object() {
        return Err(GatewayError::MalformedResponse(
            "reply JSON is not an object".into(),
        ));
    }
    Ok(value)
}
