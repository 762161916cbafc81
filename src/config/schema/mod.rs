mod core;
mod gateway;
mod observability;
mod relay;

pub use core::{Config, DEFAULT_MODEL};
pub use gateway::GatewayConfig;
pub use observability::ObservabilityConfig;
pub use relay::RelayConfig;
