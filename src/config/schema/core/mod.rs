mod env_overrides;
mod loader;
#[cfg(test)]
mod test_env;
mod types;
mod validate;

pub use types::{Config, DEFAULT_MODEL};
