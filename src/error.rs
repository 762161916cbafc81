use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for Scene Machine.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; the binary glue continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum SceneError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Prompt/response gateway ─────────────────────────────────────────
    #[error("gateway: {0}")]
    Gateway(#[from] GatewayError),

    // ── Session ─────────────────────────────────────────────────────────
    #[error("session: {0}")]
    Session(#[from] SessionError),

    // ── Relay server ────────────────────────────────────────────────────
    #[error("relay: {0}")]
    Relay(#[from] RelayError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Gateway errors ─────────────────────────────────────────────────────────

const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Failures of a model round-trip, from the wire up to the parsed shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Network failure or non-2xx status. `message` is the server-supplied
    /// `{error}` text when the body carried one.
    #[error("transport failed{}: {detail}", status_suffix(.status))]
    Transport {
        status: Option<u16>,
        message: Option<String>,
        detail: String,
    },

    #[error("no response within {secs}s")]
    Timeout { secs: u64 },

    /// No parseable JSON object in the reply.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// JSON parsed but a required field is missing or mistyped.
    #[error("unexpected response shape: {0}")]
    ResponseShape(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

impl GatewayError {
    /// Message shown to the learner. Every variant maps to a distinct text.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string(),
            Self::Timeout { .. } => {
                "The AI is taking too long to respond. Please try again.".to_string()
            }
            Self::MalformedResponse(_) => "Could not parse AI response. Please try again.".into(),
            Self::ResponseShape(_) => {
                "The AI replied in an unexpected format. Please try again.".into()
            }
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

// ─── Session errors ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("action {action} is not available in stage {stage}")]
    InvalidTransition { action: String, stage: String },
}

// ─── Relay errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(
        "refusing to bind to {0}: the relay would be reachable from other machines; \
         use --host 127.0.0.1 or set [relay] allow_public_bind = true"
    )]
    PublicBind(String),

    #[error("bind failed: {0}")]
    Bind(String),

    #[error("upstream credentials not set")]
    MissingCredentials,

    #[error("upstream failed{}: {detail}", status_suffix(.status))]
    Upstream { status: Option<u16>, detail: String },
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, SceneError>;
