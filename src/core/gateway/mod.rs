//! Prompt/response gateway: turns a draft or rewrite into a validated model
//! reply, tolerating prose and code fences around the JSON.

pub mod client;
pub mod extract;
pub mod prompts;
pub mod transport;
pub mod validate;

pub use client::{DEFAULT_TIMEOUT_SECS, GatewayOptions, PromptGateway, WritingGateway};
pub use extract::extract_json_object;
pub use transport::{ChatMessage, ChatRequest, ChatRole, ChatTransport, HttpChatTransport};
