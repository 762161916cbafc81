use super::extract::extract_json_object;
use super::prompts::{
    EXAMPLE_MAX_TOKENS, FEEDBACK_MAX_TOKENS, feedback_prompt, vivid_example_prompt,
};
use super::transport::{ChatMessage, ChatTransport};
use super::validate::{feedback_from_value, vivid_example_from_value};
use crate::core::writing::{Feedback, VividExample};
use crate::error::GatewayError;
use crate::utils::log_preview;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Default hard limit on one model round-trip.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const RAW_PREVIEW_CHARS: usize = 300;

/// The two model-backed operations the writing session needs.
#[async_trait]
pub trait WritingGateway: Send + Sync {
    async fn request_vivid_example(&self, draft: &str) -> Result<VividExample, GatewayError>;

    async fn request_feedback(
        &self,
        draft: &str,
        example_text: &str,
        rewrite: &str,
    ) -> Result<Feedback, GatewayError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayOptions {
    pub timeout: Duration,
    pub example_max_tokens: u32,
    pub feedback_max_tokens: u32,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            example_max_tokens: EXAMPLE_MAX_TOKENS,
            feedback_max_tokens: FEEDBACK_MAX_TOKENS,
        }
    }
}

/// Builds the prompts, enforces the timeout, and validates replies.
pub struct PromptGateway<T> {
    transport: T,
    options: GatewayOptions,
}

impl<T: ChatTransport> PromptGateway<T> {
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, GatewayOptions::default())
    }

    pub fn with_options(transport: T, options: GatewayOptions) -> Self {
        Self { transport, options }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn options(&self) -> &GatewayOptions {
        &self.options
    }

    /// Send one prompt and return the JSON object found in the reply.
    ///
    /// The transport future is dropped when the deadline passes, which cancels
    /// the request; nothing from a late reply is ever returned.
    async fn round_trip(
        &self,
        operation: &'static str,
        prompt: String,
        max_tokens: u32,
    ) -> Result<Value, GatewayError> {
        let call = self
            .transport
            .complete(vec![ChatMessage::user(prompt)], max_tokens);
        let raw = match tokio::time::timeout(self.options.timeout, call).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    operation,
                    timeout_secs = self.options.timeout.as_secs(),
                    "model call timed out"
                );
                return Err(GatewayError::Timeout {
                    secs: self.options.timeout.as_secs(),
                });
            }
        };

        extract_json_object(&raw).inspect_err(|error| {
            tracing::warn!(operation, error = %error, "could not parse model reply");
            tracing::debug!(
                operation,
                raw = %log_preview(&raw, RAW_PREVIEW_CHARS),
                "raw model reply"
            );
        })
    }
}

#[async_trait]
impl<T: ChatTransport> WritingGateway for PromptGateway<T> {
    async fn request_vivid_example(&self, draft: &str) -> Result<VividExample, GatewayError> {
        let value = self
            .round_trip(
                "vivid_example",
                vivid_example_prompt(draft),
                self.options.example_max_tokens,
            )
            .await?;
        let example = vivid_example_from_value(&value)?;
        tracing::debug!(
            highlights = example.highlights.len(),
            "vivid example received"
        );
        Ok(example)
    }

    async fn request_feedback(
        &self,
        draft: &str,
        example_text: &str,
        rewrite: &str,
    ) -> Result<Feedback, GatewayError> {
        let value = self
            .round_trip(
                "feedback",
                feedback_prompt(draft, example_text, rewrite),
                self.options.feedback_max_tokens,
            )
            .await?;
        let feedback = feedback_from_value(&value)?;
        tracing::debug!(
            rating = feedback.overall_rating.label(),
            vividness = feedback.vividness_score,
            "feedback received"
        );
        Ok(feedback)
    }
}
