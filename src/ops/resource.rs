use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use super::poller::StatePoller;
use crate::error::{OrchestratorError, Result};
use crate::zowe::{apf_add_command, ZoweCli};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Up,
    Down,
}

impl ResourceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceState::Up => "UP",
            ResourceState::Down => "DOWN",
        }
    }
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceState {
    type Err = OrchestratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "UP" => Ok(ResourceState::Up),
            "DOWN" => Ok(ResourceState::Down),
            other => Err(OrchestratorError::Validation(other.to_string())),
        }
    }
}

/// Starts and stops SSM managed resources.
pub struct ResourceController {
    cli: Arc<dyn ZoweCli>,
    poller: StatePoller,
}

impl ResourceController {
    pub fn new(cli: Arc<dyn ZoweCli>, poller: StatePoller) -> Self {
        Self { cli, poller }
    }

    /// Move `resource` to `target` (`UP` or `DOWN`), wait for SSM to report
    /// it, then APF-authorize `apf` when one is given.
    ///
    /// The first failing step ends the operation with its own error. An
    /// unrecognised target is rejected before any command is issued.
    pub async fn change_state(
        &self,
        resource: &str,
        target: &str,
        apf: Option<&str>,
    ) -> Result<()> {
        let state: ResourceState = target.parse()?;

        info!("Requesting {} -> {}", resource, state);
        match state {
            ResourceState::Up => self.cli.start_resource(resource).await?,
            ResourceState::Down => self.cli.stop_resource(resource).await?,
        };

        self.poller.await_state(resource, state.as_str()).await?;

        if let Some(dataset) = apf {
            info!("APF authorizing {}", dataset);
            self.cli
                .issue_console_command(&apf_add_command(dataset))
                .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::poller::PollPolicy;
    use crate::subprocess::{MockProcessRunner, SubprocessManager};
    use std::time::Duration;
    use tokio::time::Instant;

    fn controller() -> (ResourceController, MockProcessRunner) {
        let (manager, mock) = SubprocessManager::mock();
        let cli: Arc<dyn ZoweCli> = Arc::new(manager.zowe("zowe"));
        let poller = StatePoller::new(Arc::clone(&cli), PollPolicy::default());
        (ResourceController::new(cli, poller), mock)
    }

    fn expect_status(mock: &mut MockProcessRunner, states: &[&str]) {
        for state in states {
            mock.expect_command("zowe")
                .with_args_prefix(&["ops", "show", "resource"])
                .returns_stdout(&format!("current: {state}\n"))
                .times(1)
                .finish();
        }
    }

    #[test]
    fn test_parse_state() {
        assert_eq!("UP".parse::<ResourceState>().unwrap(), ResourceState::Up);
        assert_eq!("DOWN".parse::<ResourceState>().unwrap(), ResourceState::Down);
        assert!("up".parse::<ResourceState>().is_err());
        assert_eq!(ResourceState::Down.to_string(), "DOWN");
    }

    #[tokio::test]
    async fn test_unsupported_state_issues_no_command() {
        let (controller, mock) = controller();

        let err = controller.change_state("R1", "PAUSED", None).await.unwrap_err();

        match err {
            OrchestratorError::Validation(state) => assert_eq!(state, "PAUSED"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert!(mock.get_call_history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_waits_for_up_without_apf() {
        let (controller, mut mock) = controller();
        mock.expect_command("zowe")
            .with_args_prefix(&["ops", "start", "resource", "R1"])
            .returns_stdout("Start request issued")
            .finish();
        expect_status(&mut mock, &["DOWN", "STARTING", "UP"]);

        let start = Instant::now();
        controller.change_state("R1", "UP", None).await.unwrap();
        let elapsed = start.elapsed();

        assert!(elapsed >= Duration::from_millis(3000));
        assert!(elapsed < Duration::from_millis(3100));
        let history = mock.get_call_history();
        assert_eq!(history.len(), 4);
        assert!(history.iter().all(|cmd| cmd.args[0] == "ops"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_then_apf_authorize() {
        let (controller, mut mock) = controller();
        mock.expect_command("zowe")
            .with_args_prefix(&["ops", "stop", "resource", "R2"])
            .finish();
        expect_status(&mut mock, &["DOWN"]);
        mock.expect_command("zowe")
            .with_args_prefix(&["console", "issue", "command"])
            .returns_stdout("CSV410I DATA SET RT.SZWEAUTH ADDED TO APF LIST")
            .finish();

        controller
            .change_state("R2", "DOWN", Some("RT.SZWEAUTH"))
            .await
            .unwrap();

        let history = mock.get_call_history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[2].args[3], "SETPROG APF,ADD,DSNAME=RT.SZWEAUTH,SMS");
    }

    #[tokio::test]
    async fn test_start_failure_skips_polling() {
        let (controller, mut mock) = controller();
        mock.expect_command("zowe")
            .with_args_prefix(&["ops", "start"])
            .returns_stderr("IZE0123E resource R1 is not defined\n")
            .finish();

        let err = controller.change_state("R1", "UP", Some("RT.SZWEAUTH")).await.unwrap_err();

        assert!(matches!(err, OrchestratorError::Command { .. }));
        assert!(mock.verify_called("zowe", 1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_poll_timeout_skips_apf() {
        let (controller, mut mock) = controller();
        mock.expect_command("zowe")
            .with_args_prefix(&["ops", "start"])
            .finish();
        mock.expect_command("zowe")
            .with_args_prefix(&["ops", "show"])
            .returns_stdout("current: DOWN")
            .finish();

        let err = controller.change_state("R1", "UP", Some("RT.SZWEAUTH")).await.unwrap_err();

        assert!(matches!(err, OrchestratorError::Timeout { .. }));
        // one start + 30 status reads, no console command
        assert!(mock.verify_called("zowe", 31));
    }
}
