use crate::error::GatewayError;
use crate::utils::sanitize_api_error;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Wire body of the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// Success body of the chat endpoint; the answer sits at `content[0].text`.
#[derive(Debug, Deserialize)]
struct ChatEnvelope {
    #[serde(default)]
    content: Vec<EnvelopeBlock>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// One request/response exchange with the model endpoint.
///
/// Returns the model's raw text answer. Timeouts are enforced by the caller
/// in [`super::PromptGateway`]; implementations may also report their own.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> Result<String, GatewayError>;
}

/// `ChatTransport` over HTTP POST to a single fixed endpoint.
pub struct HttpChatTransport {
    endpoint: String,
    client: Client,
    timeout_secs: u64,
}

impl HttpChatTransport {
    pub fn new(endpoint: &str, timeout_secs: u64) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .connect_timeout(Duration::from_secs(10))
                .pool_idle_timeout(Duration::from_secs(90))
                .build()
                .unwrap_or_else(|_| Client::new()),
            timeout_secs,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn transport_error(&self, err: &reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            return GatewayError::Timeout {
                secs: self.timeout_secs,
            };
        }
        GatewayError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: None,
            detail: sanitize_api_error(&err.to_string()),
        }
    }
}

async fn error_from_response(response: reqwest::Response) -> GatewayError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.error);
    GatewayError::Transport {
        status: Some(status.as_u16()),
        message,
        detail: sanitize_api_error(&body),
    }
}

/// Pull `content[0].text` out of a success body.
pub(crate) fn text_from_envelope(body: &str) -> Result<String, GatewayError> {
    let envelope: ChatEnvelope = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(format!("response body is not JSON: {e}")))?;
    envelope
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| GatewayError::MalformedResponse("response has no content text".into()))
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        max_tokens: u32,
    ) -> Result<String, GatewayError> {
        let request = ChatRequest {
            messages,
            max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e))?;
        text_from_envelope(&body)
    }
}
