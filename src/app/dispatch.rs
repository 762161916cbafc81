use crate::app::boundary::supervise;
use crate::app::prompter::{Prompter, TerminalPrompter};
use crate::app::wizard;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::core::gateway::validate::vivid_example_from_value;
use crate::core::gateway::{HttpChatTransport, PromptGateway, WritingGateway, extract_json_object};
use crate::core::session::Session;
use crate::ui::highlight;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Gateway that talks to the configured chat endpoint.
pub fn build_gateway(config: &Config) -> Arc<dyn WritingGateway> {
    let transport = HttpChatTransport::new(&config.gateway.endpoint, config.gateway.timeout_secs);
    Arc::new(PromptGateway::with_options(
        transport,
        config.gateway.options(),
    ))
}

async fn run_practice(config: Arc<Config>) -> Result<()> {
    let gateway = build_gateway(&config);
    info!(endpoint = %config.gateway.endpoint, "starting practice session");

    let report = supervise(
        || {
            let gateway = Arc::clone(&gateway);
            async move {
                let session = Session::new(gateway);
                tracing::debug!(session = %session.id(), "new session");
                let mut prompter = TerminalPrompter;
                wizard::run(&session, &mut prompter).await
            }
        },
        || TerminalPrompter.confirm("Start over with a fresh scene?"),
    )
    .await?;

    if report.failures > 0 {
        tracing::debug!(failures = report.failures, "practice ended after recoveries");
    }
    Ok(())
}

/// Paint a saved vivid example, or a raw model reply containing one.
pub fn render_file(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = extract_json_object(&contents).context("File has no JSON object")?;
    let example = vivid_example_from_value(&value).context("File is not a vivid example")?;
    Ok(format!(
        "{}\n\n{}",
        highlight::paint_example(&example),
        highlight::legend()
    ))
}

pub async fn dispatch(cli: Cli, config: Arc<Config>) -> Result<()> {
    match cli.command {
        Commands::Practice => run_practice(config).await,

        Commands::Serve { port, host } => {
            let port = port.unwrap_or(config.relay.port);
            let host = host.unwrap_or_else(|| config.relay.host.clone());
            if port == 0 {
                info!("Starting Scene Machine relay on {host} (random port)");
            } else {
                info!("Starting Scene Machine relay on {host}:{port}");
            }
            crate::transport::relay::run_relay(&host, port, Arc::clone(&config)).await
        }

        Commands::Render { file } => {
            println!("{}", render_file(&file)?);
            Ok(())
        }
    }
}
