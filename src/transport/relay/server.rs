use super::handlers::{handle_chat, handle_health};
use super::{
    AnthropicUpstream, MAX_BODY_SIZE, REQUEST_TIMEOUT_SECS, RelayState, UPSTREAM_TIMEOUT_SECS,
};
use crate::config::Config;
use crate::error::RelayError;
use crate::ui::style;
use anyhow::{Context, Result};
use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Returns true when the bind address is not a loopback address.
pub fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// Run the relay on `host:port`.
pub async fn run_relay(host: &str, port: u16, config: Arc<Config>) -> Result<()> {
    if is_public_bind(host) && !config.relay.allow_public_bind {
        return Err(RelayError::PublicBind(host.to_string()).into());
    }

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .context("parse relay bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| RelayError::Bind(format!("{addr}: {e}")))?;

    run_relay_with_listener(host, listener, config).await
}

/// Run the relay from a pre-bound listener until Ctrl-C.
pub async fn run_relay_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Arc<Config>,
) -> Result<()> {
    let actual_port = listener
        .local_addr()
        .context("get relay listener local address")?
        .port();
    let display_addr = format!("{host}:{actual_port}");

    let upstream = AnthropicUpstream::new(
        config.api_key(),
        &config.relay.upstream_url,
        &config.model,
        Duration::from_secs(UPSTREAM_TIMEOUT_SECS),
    );
    if !upstream.has_credentials() {
        tracing::warn!("no API key configured; /api/chat will answer 500");
    }
    print_relay_banner(&display_addr, &config, upstream.has_credentials());

    let app = build_app(
        RelayState::new(Arc::new(upstream)),
        &config.relay.cors_origins,
    );
    tracing::info!(addr = %display_addr, model = %config.model, "relay started");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve HTTP relay")?;

    tracing::info!("relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

fn print_relay_banner(display_addr: &str, config: &Config, has_key: bool) {
    println!(
        "{} {}",
        style::header("Relay listening on"),
        style::url(format!("http://{display_addr}"))
    );
    println!("  POST /api/chat -> {}", style::dim(&config.relay.upstream_url));
    println!("  GET  /health");
    println!("  Model: {}", style::value(&config.model));
    if !has_key {
        println!(
            "  {}",
            style::yellow("No API key set. Add api_key to config.toml or set ANTHROPIC_API_KEY.")
        );
    }
    if !config.relay.cors_origins.is_empty() {
        println!("  CORS: {}", config.relay.cors_origins.join(", "));
    }
}

pub fn build_app(state: RelayState, cors_origins: &[String]) -> Router {
    let mut app = Router::new()
        .route("/health", get(handle_health))
        .route("/api/chat", post(handle_chat))
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ));

    if !cors_origins.is_empty() {
        let origins: Vec<_> = cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        );
    }

    app
}
