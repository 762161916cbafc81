use serde::{Deserialize, Serialize};
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// "error" | "warn" | "info" | "debug" | "trace"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ObservabilityConfig {
    /// Parsed log level; unknown names fall back to `INFO`.
    pub fn level(&self) -> Level {
        self.log_level.trim().parse().unwrap_or(Level::INFO)
    }
}
