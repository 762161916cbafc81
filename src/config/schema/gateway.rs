use crate::core::gateway::{DEFAULT_TIMEOUT_SECS, GatewayOptions};
use crate::core::gateway::prompts::{EXAMPLE_MAX_TOKENS, FEEDBACK_MAX_TOKENS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the wizard sends its prompts, and how long it waits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Chat endpoint (default: http://127.0.0.1:8787/api/chat)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Hard limit per model call, in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_example_max_tokens")]
    pub example_max_tokens: u32,
    #[serde(default = "default_feedback_max_tokens")]
    pub feedback_max_tokens: u32,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8787/api/chat".into()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_example_max_tokens() -> u32 {
    EXAMPLE_MAX_TOKENS
}

fn default_feedback_max_tokens() -> u32 {
    FEEDBACK_MAX_TOKENS
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            example_max_tokens: default_example_max_tokens(),
            feedback_max_tokens: default_feedback_max_tokens(),
        }
    }
}

impl GatewayConfig {
    pub fn options(&self) -> GatewayOptions {
        GatewayOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            example_max_tokens: self.example_max_tokens,
            feedback_max_tokens: self.feedback_max_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gateway_config() {
        let config = GatewayConfig::default();

        assert_eq!(config.endpoint, "http://127.0.0.1:8787/api/chat");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.example_max_tokens, 2000);
        assert_eq!(config.feedback_max_tokens, 1500);
        assert_eq!(config.options(), GatewayOptions::default());
    }

    #[test]
    fn partial_table_keeps_defaults() {
        let config: GatewayConfig = toml::from_str("timeout_secs = 12").unwrap();
        assert_eq!(config.timeout_secs, 12);
        assert_eq!(config.endpoint, default_endpoint());
        assert_eq!(config.options().timeout, Duration::from_secs(12));
    }
}
