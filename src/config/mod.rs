pub mod schema;

pub use schema::{Config, DEFAULT_MODEL, GatewayConfig, ObservabilityConfig, RelayConfig};
