#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use scene_machine::{Cli, Config, app};
use std::sync::Arc;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load_or_init()?;
    config.apply_env_overrides();
    config.validate()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.observability.level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    app::dispatch(cli, Arc::new(config)).await
}
