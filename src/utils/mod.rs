pub mod scrub;
pub mod text;

pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use text::{log_preview, truncate_with_ellipsis};
