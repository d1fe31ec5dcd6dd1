//! Management CLI wrapper
//!
//! Builds the argument vector for every CLI subcommand the orchestrator
//! issues and classifies the outcome. Callers only ever see stdout or an
//! [`OrchestratorError`](crate::error::OrchestratorError).

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::subprocess::{ProcessCommand, ProcessCommandBuilder, ProcessRunner};

pub mod classify;

pub use classify::classify;

#[async_trait]
pub trait ZoweCli: Send + Sync {
    /// Command issued by [`ZoweCli::show_resource`].
    fn show_resource_command(&self, resource: &str) -> ProcessCommand;
    /// Command issued by [`ZoweCli::submit_job`].
    fn submit_job_command(&self, dataset: &str, download_dir: &str) -> ProcessCommand;

    /// `ops show resource <name>`
    async fn show_resource(&self, resource: &str) -> Result<String>;
    /// `ops start resource <name>`
    async fn start_resource(&self, resource: &str) -> Result<String>;
    /// `ops stop resource <name>`
    async fn stop_resource(&self, resource: &str) -> Result<String>;
    /// `console issue command "<command>"`
    async fn issue_console_command(&self, command: &str) -> Result<String>;
    /// `jobs submit data-set "<ds>" -d <dir> --rfj`
    async fn submit_job(&self, dataset: &str, download_dir: &str) -> Result<String>;
    /// `file-master-plus copy data-set "<src>" "<dst>"`
    async fn copy_data_set(&self, source: &str, target: &str) -> Result<String>;
    /// `files upload ftu "<local>" "<remote>" -b`
    async fn upload_file_to_uss(&self, local: &str, remote: &str) -> Result<String>;
}

pub struct ZoweCliImpl {
    runner: Arc<dyn ProcessRunner>,
    program: String,
}

impl ZoweCliImpl {
    pub fn new(runner: Arc<dyn ProcessRunner>, program: &str) -> Self {
        Self {
            runner,
            program: program.to_string(),
        }
    }

    fn command<I, S>(&self, args: I) -> ProcessCommand
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ProcessCommandBuilder::new(&self.program).args(args).build()
    }

    async fn execute(&self, command: ProcessCommand) -> Result<String> {
        let result = self.runner.run(command.clone()).await;
        classify(&command, result)
    }
}

/// Console command that APF-authorizes an SMS-managed dataset.
pub fn apf_add_command(dataset: &str) -> String {
    format!("SETPROG APF,ADD,DSNAME={dataset},SMS")
}

#[async_trait]
impl ZoweCli for ZoweCliImpl {
    fn show_resource_command(&self, resource: &str) -> ProcessCommand {
        self.command(["ops", "show", "resource", resource])
    }

    fn submit_job_command(&self, dataset: &str, download_dir: &str) -> ProcessCommand {
        self.command([
            "jobs",
            "submit",
            "data-set",
            dataset,
            "-d",
            download_dir,
            "--rfj",
        ])
    }

    async fn show_resource(&self, resource: &str) -> Result<String> {
        self.execute(self.show_resource_command(resource)).await
    }

    async fn start_resource(&self, resource: &str) -> Result<String> {
        self.execute(self.command(["ops", "start", "resource", resource]))
            .await
    }

    async fn stop_resource(&self, resource: &str) -> Result<String> {
        self.execute(self.command(["ops", "stop", "resource", resource]))
            .await
    }

    async fn issue_console_command(&self, command: &str) -> Result<String> {
        self.execute(self.command(["console", "issue", "command", command]))
            .await
    }

    async fn submit_job(&self, dataset: &str, download_dir: &str) -> Result<String> {
        self.execute(self.submit_job_command(dataset, download_dir))
            .await
    }

    async fn copy_data_set(&self, source: &str, target: &str) -> Result<String> {
        self.execute(self.command(["file-master-plus", "copy", "data-set", source, target]))
            .await
    }

    async fn upload_file_to_uss(&self, local: &str, remote: &str) -> Result<String> {
        self.execute(self.command(["files", "upload", "ftu", local, remote, "-b"]))
            .await
    }
}
