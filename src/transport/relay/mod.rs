//! Axum HTTP relay that implements the chat endpoint the wizard talks to.
//!
//! The relay keeps the Messages API key on the server, checks each request's
//! shape and token budget, and passes the upstream reply through unchanged.
//! Request bodies are capped at 64KB and requests time out after 30s.

mod handlers;
mod server;
mod upstream;

pub use server::{build_app, is_public_bind, run_relay, run_relay_with_listener};
pub use upstream::{ANTHROPIC_VERSION, AnthropicUpstream, Upstream};

use std::sync::Arc;

/// Maximum request body size (64KB)
pub const MAX_BODY_SIZE: usize = 65_536;
/// Request timeout (30s)
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Upstream calls give up slightly before the request timeout so the caller
/// sees a 502 rather than a 408.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 25;
/// Largest `max_tokens` a caller may ask for.
pub const MAX_TOKENS_LIMIT: u32 = 4096;

/// Shared state for all axum handlers
#[derive(Clone)]
pub struct RelayState {
    pub upstream: Arc<dyn Upstream>,
}

impl RelayState {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }
}
