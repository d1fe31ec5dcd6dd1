use regex::Regex;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::PollSettings;
use crate::error::{OrchestratorError, Result};
use crate::zowe::ZoweCli;

static CURRENT_STATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"current:[ \t]*(\S+)").expect("Invalid regex pattern"));

/// Extract the token following `current:` from `ops show resource` output.
pub fn parse_current_state(status: &str) -> Option<&str> {
    CURRENT_STATE_PATTERN
        .captures(status)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Fixed-interval retry policy. The longest possible wait is exactly
/// `max_tries * interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_tries: u32,
    pub interval: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        PollSettings::default().into()
    }
}

impl From<PollSettings> for PollPolicy {
    fn from(settings: PollSettings) -> Self {
        Self {
            max_tries: settings.max_tries,
            interval: settings.interval(),
        }
    }
}

impl PollPolicy {
    pub fn total_wait(&self) -> Duration {
        self.interval * self.max_tries
    }
}

pub struct StatePoller {
    cli: Arc<dyn ZoweCli>,
    policy: PollPolicy,
    cancel: CancellationToken,
}

impl StatePoller {
    pub fn new(cli: Arc<dyn ZoweCli>, policy: PollPolicy) -> Self {
        Self {
            cli,
            policy,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Wait until `resource` reports `desired` as its current state.
    ///
    /// Every attempt sleeps one interval and then reads the status once.
    /// A state mismatch uses up an attempt; any error from the status query
    /// ends the wait immediately.
    pub async fn await_state(&self, resource: &str, desired: &str) -> Result<()> {
        let mut remaining = self.policy.max_tries;

        while remaining > 0 {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    return Err(OrchestratorError::Cancelled(format!(
                        "while waiting for {resource} to reach {desired}"
                    )));
                }
                _ = tokio::time::sleep(self.policy.interval) => {}
            }

            let status = self.cli.show_resource(resource).await?;
            let current = parse_current_state(&status).ok_or_else(|| {
                OrchestratorError::UnexpectedOutput {
                    command: self.cli.show_resource_command(resource).display(),
                    detail: "no 'current:' state in status output".to_string(),
                }
            })?;

            if current == desired {
                info!("{} reached state {}", resource, desired);
                return Ok(());
            }

            remaining -= 1;
            debug!(
                "{} is {} (waiting for {}), {} attempt(s) left",
                resource, current, desired, remaining
            );
        }

        Err(OrchestratorError::Timeout {
            resource: resource.to_string(),
            desired: desired.to_string(),
        })
    }
}
