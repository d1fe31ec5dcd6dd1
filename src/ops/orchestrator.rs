use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::job::{JobSubmitter, DEFAULT_MAX_RETURN_CODE};
use super::poller::{PollPolicy, StatePoller};
use super::resource::{ResourceController, ResourceState};
use super::sequencer::run_sequence;
use super::task::{Step, Task};
use crate::config::MaintenanceConfig;
use crate::error::Result;
use crate::subprocess::SubprocessManager;
use crate::zowe::{apf_add_command, ZoweCli};

/// Runs named maintenance tasks against one immutable configuration.
pub struct Orchestrator {
    config: Arc<MaintenanceConfig>,
    cli: Arc<dyn ZoweCli>,
    resources: ResourceController,
    jobs: JobSubmitter,
    cancel: CancellationToken,
}

impl Orchestrator {
    pub fn new(
        config: MaintenanceConfig,
        subprocess: &SubprocessManager,
        cancel: CancellationToken,
    ) -> Self {
        let cli: Arc<dyn ZoweCli> = Arc::new(subprocess.zowe(&config.cli));
        Self::with_cli(config, cli, cancel)
    }

    pub fn with_cli(
        config: MaintenanceConfig,
        cli: Arc<dyn ZoweCli>,
        cancel: CancellationToken,
    ) -> Self {
        let poller = StatePoller::new(Arc::clone(&cli), PollPolicy::from(config.poll))
            .with_cancellation(cancel.clone());

        Self {
            config: Arc::new(config),
            resources: ResourceController::new(Arc::clone(&cli), poller),
            jobs: JobSubmitter::new(Arc::clone(&cli)),
            cli,
            cancel,
        }
    }

    /// Run every step of `tasks` in order, stopping at the first failure or
    /// once the cancellation token fires.
    pub async fn run_tasks(&self, tasks: &[Task]) -> Result<()> {
        let plan = Task::plan(tasks);
        info!(
            "Running {} step(s): {}",
            plan.len(),
            plan.iter().map(Step::name).collect::<Vec<_>>().join(", ")
        );
        run_sequence(&plan, &self.cancel, |step| self.run_step(*step)).await
    }

    pub async fn run_task(&self, task: Task) -> Result<()> {
        self.run_tasks(&[task]).await
    }

    pub async fn run_step(&self, step: Step) -> Result<()> {
        let config = &self.config;
        match step {
            Step::Apf => self.apf().await,
            Step::Apply => self.submit("apply", &config.apply_member).await,
            Step::ApplyCheck => self.submit("apply-check", &config.apply_check_member).await,
            Step::Receive => self.submit("receive", &config.receive_member).await,
            Step::Reject => self.submit("reject", &config.reject_member).await,
            Step::Restore => self.submit("restore", &config.restore_member).await,
            Step::Copy => self.copy().await,
            Step::Upload => self.upload().await,
            Step::Start1 => self.change(&config.ssm_resource1, ResourceState::Up).await,
            Step::Start2 => self.change(&config.ssm_resource2, ResourceState::Up).await,
            Step::Stop1 => self.change(&config.ssm_resource1, ResourceState::Down).await,
            Step::Stop2 => self.change(&config.ssm_resource2, ResourceState::Down).await,
        }
    }

    /// APF authorize `<runtimeEnv>.<maintainedPds>`.
    pub async fn apf(&self) -> Result<()> {
        let command = apf_add_command(&self.config.runtime_dataset());
        self.cli.issue_console_command(&command).await?;
        Ok(())
    }

    /// Copy the maintained PDS from the SMP/E environment to runtime.
    pub async fn copy(&self) -> Result<()> {
        self.cli
            .copy_data_set(&self.config.smpe_dataset(), &self.config.runtime_dataset())
            .await?;
        Ok(())
    }

    /// Upload the maintenance file to USS in binary.
    pub async fn upload(&self) -> Result<()> {
        self.cli
            .upload_file_to_uss(&self.config.local_path(), &self.config.remote_path())
            .await?;
        Ok(())
    }

    async fn submit(&self, name: &str, member: &str) -> Result<()> {
        let dataset = self.config.jcl_member(member);
        let archive = self.config.archive_dir(name);
        self.jobs
            .submit_job(&dataset, &archive, DEFAULT_MAX_RETURN_CODE)
            .await?;
        Ok(())
    }

    async fn change(&self, resource: &str, state: ResourceState) -> Result<()> {
        self.resources
            .change_state(resource, state.as_str(), None)
            .await
    }
}
