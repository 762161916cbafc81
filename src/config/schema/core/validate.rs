use super::Config;
use crate::error::ConfigError;
use url::Url;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "gateway.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.gateway.example_max_tokens == 0 || self.gateway.feedback_max_tokens == 0 {
            return Err(ConfigError::Validation(
                "gateway token budgets must be greater than 0".into(),
            ));
        }
        require_http_url("gateway.endpoint", &self.gateway.endpoint)?;
        require_http_url("relay.upstream_url", &self.relay.upstream_url)?;
        if self.model.trim().is_empty() {
            return Err(ConfigError::Validation("model must not be empty".into()));
        }
        Ok(())
    }
}

fn require_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::Validation(format!("{field} is not a valid URL: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::Validation(format!(
            "{field} must use http or https, not {other}"
        ))),
    }
}
