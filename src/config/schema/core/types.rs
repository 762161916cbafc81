use super::super::{GatewayConfig, ObservabilityConfig, RelayConfig};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Model the relay asks for when none is configured.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

pub(super) const CONFIG_DIR_NAME: &str = ".scene-machine";
pub(super) const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Messages API key used by the relay
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
            api_key: None,
            model: default_model(),
            gateway: GatewayConfig::default(),
            relay: RelayConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl Config {
    /// The configured key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
