use std::fmt::Display;
use std::future::Future;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::error::{OrchestratorError, Result};

/// Run `steps` strictly in order with `run`.
///
/// The first failing step aborts the sequence and its error is returned
/// unchanged; later steps are never started. Once `cancel` fires no further
/// step is started.
pub async fn run_sequence<T, F, Fut>(
    steps: &[T],
    cancel: &CancellationToken,
    mut run: F,
) -> Result<()>
where
    T: Display,
    F: FnMut(&T) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let total = steps.len();

    for (index, step) in steps.iter().enumerate() {
        if cancel.is_cancelled() {
            warn!(
                "[{}/{}] Cancelled; skipping {} remaining step(s)",
                index + 1,
                total,
                total - index
            );
            return Err(OrchestratorError::Cancelled(format!("before '{step}'")));
        }

        let started = Instant::now();
        info!("[{}/{}] Starting '{}'", index + 1, total, step);

        if let Err(e) = run(step).await {
            warn!(
                "[{}/{}] '{}' failed after {:?}; skipping {} remaining step(s)",
                index + 1,
                total,
                step,
                started.elapsed(),
                total - index - 1
            );
            return Err(e);
        }

        info!(
            "[{}/{}] Finished '{}' in {:?}",
            index + 1,
            total,
            step,
            started.elapsed()
        );
    }

    Ok(())
}
