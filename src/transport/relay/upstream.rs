use crate::core::gateway::{ChatMessage, ChatRequest};
use crate::error::RelayError;
use crate::utils::sanitize_api_error;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Anthropic Messages API protocol version sent with every call.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Where the relay sends a validated chat request.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Forward the request and return the upstream JSON body untouched.
    async fn forward(&self, request: &ChatRequest) -> Result<Value, RelayError>;
}

/// Messages API client that holds the key on the server side.
pub struct AnthropicUpstream {
    cached_api_key: Option<String>,
    cached_messages_url: String,
    model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [ChatMessage],
}

impl AnthropicUpstream {
    pub fn new(api_key: Option<&str>, base_url: &str, model: &str, timeout: Duration) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            cached_api_key: api_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(ToString::to_string),
            cached_messages_url: format!("{base}/v1/messages"),
            model: model.to_string(),
            client: Client::builder()
                .timeout(timeout)
                .connect_timeout(Duration::from_secs(10))
                .pool_max_idle_per_host(10)
                .pool_idle_timeout(Duration::from_secs(90))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    pub fn messages_url(&self) -> &str {
        &self.cached_messages_url
    }

    pub fn has_credentials(&self) -> bool {
        self.cached_api_key.is_some()
    }
}

fn upstream_error(err: &reqwest::Error) -> RelayError {
    RelayError::Upstream {
        status: err.status().map(|s| s.as_u16()),
        detail: sanitize_api_error(&err.to_string()),
    }
}

#[async_trait]
impl Upstream for AnthropicUpstream {
    async fn forward(&self, request: &ChatRequest) -> Result<Value, RelayError> {
        let api_key = self
            .cached_api_key
            .as_ref()
            .ok_or(RelayError::MissingCredentials)?;

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            messages: &request.messages,
        };

        let response = self
            .client
            .post(&self.cached_messages_url)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .header("x-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| upstream_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read upstream error body>".to_string());
            return Err(RelayError::Upstream {
                status: Some(status.as_u16()),
                detail: sanitize_api_error(&text),
            });
        }

        response.json().await.map_err(|e| upstream_error(&e))
    }
}
