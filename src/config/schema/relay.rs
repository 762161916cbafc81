use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Relay port (default: 8787)
    #[serde(default = "default_relay_port")]
    pub port: u16,
    /// Relay host (default: 127.0.0.1)
    #[serde(default = "default_relay_host")]
    pub host: String,
    /// Messages API base URL the relay forwards to
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,
    /// Allow binding to non-localhost (default: false)
    #[serde(default)]
    pub allow_public_bind: bool,
    /// Origins allowed to call the relay from a browser. Empty disables CORS.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_relay_port() -> u16 {
    8787
}

fn default_relay_host() -> String {
    "127.0.0.1".into()
}

fn default_upstream_url() -> String {
    "https://api.anthropic.com".into()
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: default_relay_port(),
            host: default_relay_host(),
            upstream_url: default_upstream_url(),
            allow_public_bind: false,
            cors_origins: Vec::new(),
        }
    }
}
