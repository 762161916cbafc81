//! Top-level error boundary for the terminal wizard.

use crate::ui::style;
use anyhow::Result;
use std::future::Future;

pub const APOLOGY: &str = "Oops! Something went wrong.";

/// How a supervised run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryReport {
    /// Runs that ended in an error or a panic.
    pub failures: usize,
}

/// Run `attempt` on its own task. If it returns an error or panics, print the
/// apology and ask `offer_reset` whether to start a fresh run.
///
/// Every attempt builds its state from scratch, so a reset never sees
/// anything left over from the failed run.
pub async fn supervise<F, Fut, R>(mut attempt: F, mut offer_reset: R) -> Result<BoundaryReport>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<()>> + Send + 'static,
    R: FnMut() -> Result<bool>,
{
    let mut failures = 0;
    loop {
        match tokio::spawn(attempt()).await {
            Ok(Ok(())) => return Ok(BoundaryReport { failures }),
            Ok(Err(error)) => {
                tracing::error!(error = %format!("{error:#}"), "wizard failed");
            }
            Err(join_error) if join_error.is_panic() => {
                tracing::error!("wizard panicked");
            }
            Err(join_error) => return Err(join_error.into()),
        }
        failures += 1;

        println!();
        println!("  😅 {}", style::header(APOLOGY));
        println!("  {}", style::dim("Don't worry, let's start fresh and try again!"));
        if !offer_reset()? {
            return Ok(BoundaryReport { failures });
        }
    }
}
