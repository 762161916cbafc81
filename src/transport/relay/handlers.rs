use super::{MAX_TOKENS_LIMIT, RelayState};
use crate::core::gateway::ChatRequest;
use crate::error::RelayError;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

const MISSING_KEY_MESSAGE: &str = "The server has no API key configured.";

pub(super) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// Reject requests the upstream would refuse anyway, before spending a call.
pub(super) fn validate_chat_request(request: &ChatRequest) -> Result<(), String> {
    if request.messages.is_empty() {
        return Err("messages must not be empty".into());
    }
    if request.messages.iter().any(|m| m.content.trim().is_empty()) {
        return Err("message content must not be empty".into());
    }
    if request.max_tokens == 0 || request.max_tokens > MAX_TOKENS_LIMIT {
        return Err(format!(
            "max_tokens must be between 1 and {MAX_TOKENS_LIMIT}"
        ));
    }
    Ok(())
}

/// GET /health
pub(super) async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/chat: forward `{messages, max_tokens}` to the Messages API
pub(super) async fn handle_chat(
    State(state): State<RelayState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                StatusCode::PAYLOAD_TOO_LARGE
            } else {
                StatusCode::BAD_REQUEST
            };
            tracing::debug!(%status, reason = %rejection.body_text(), "rejected chat body");
            return error_response(status, &format!("Invalid request: {}", rejection.body_text()));
        }
    };

    if let Err(reason) = validate_chat_request(&request) {
        tracing::debug!(%reason, "rejected chat request");
        return error_response(StatusCode::BAD_REQUEST, &reason);
    }

    match state.upstream.forward(&request).await {
        Ok(body) => {
            tracing::debug!(max_tokens = request.max_tokens, "chat request relayed");
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(RelayError::MissingCredentials) => {
            tracing::error!("chat request refused: no API key configured");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, MISSING_KEY_MESSAGE)
        }
        Err(err) => {
            tracing::warn!(error = %err, "upstream call failed");
            error_response(StatusCode::BAD_GATEWAY, &err.to_string())
        }
    }
}
