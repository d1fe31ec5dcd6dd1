//! Maintenance configuration
//!
//! A single immutable record describing the SMP/E environment, the runtime
//! environment, the JCL members used for each maintenance step, the SSM
//! resources to cycle, and the file transfer locations. Field names on disk
//! are camelCase.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{OrchestratorError, Result};

pub mod loader;


pub use loader::ConfigLoader;

pub const DEFAULT_CLI: &str = "zowe";
pub const DEFAULT_JOB_ARCHIVE: &str = "job-archive";
pub const DEFAULT_POLL_TRIES: u32 = 30;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceConfig {
    /// High-level qualifier of the runtime environment.
    pub runtime_env: String,
    /// Low-level qualifier of the PDS receiving maintenance.
    pub maintained_pds: String,
    /// PDS holding the SMP/E JCL members.
    pub remote_jcl_pds: String,
    pub apply_member: String,
    pub apply_check_member: String,
    pub receive_member: String,
    pub reject_member: String,
    pub restore_member: String,
    /// High-level qualifier of the SMP/E target environment.
    pub smpe_env: String,
    pub ssm_resource1: String,
    pub ssm_resource2: String,
    pub local_folder: String,
    pub local_file: String,
    pub remote_folder: String,
    pub remote_file: String,

    /// Management CLI program.
    #[serde(default = "default_cli")]
    pub cli: String,
    /// Local directory that job spool output is downloaded under.
    #[serde(default = "default_job_archive")]
    pub job_archive: String,
    #[serde(default)]
    pub poll: PollSettings,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PollSettings {
    #[serde(default = "default_max_tries")]
    pub max_tries: u32,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_POLL_TRIES,
            interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl PollSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn default_cli() -> String {
    DEFAULT_CLI.to_string()
}

fn default_job_archive() -> String {
    DEFAULT_JOB_ARCHIVE.to_string()
}

fn default_max_tries() -> u32 {
    DEFAULT_POLL_TRIES
}

fn default_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl MaintenanceConfig {
    /// Reject empty required fields and a poll policy that can never succeed.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("runtimeEnv", &self.runtime_env),
            ("maintainedPds", &self.maintained_pds),
            ("remoteJclPds", &self.remote_jcl_pds),
            ("applyMember", &self.apply_member),
            ("applyCheckMember", &self.apply_check_member),
            ("receiveMember", &self.receive_member),
            ("rejectMember", &self.reject_member),
            ("restoreMember", &self.restore_member),
            ("smpeEnv", &self.smpe_env),
            ("ssmResource1", &self.ssm_resource1),
            ("ssmResource2", &self.ssm_resource2),
            ("localFolder", &self.local_folder),
            ("localFile", &self.local_file),
            ("remoteFolder", &self.remote_folder),
            ("remoteFile", &self.remote_file),
            ("cli", &self.cli),
            ("jobArchive", &self.job_archive),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(OrchestratorError::Config(format!(
                "empty value for {}",
                missing.join(", ")
            )));
        }

        if self.poll.max_tries == 0 {
            return Err(OrchestratorError::Config(
                "poll.maxTries must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// `<runtimeEnv>.<maintainedPds>`
    pub fn runtime_dataset(&self) -> String {
        format!("{}.{}", self.runtime_env, self.maintained_pds)
    }

    /// `<smpeEnv>.<maintainedPds>`
    pub fn smpe_dataset(&self) -> String {
        format!("{}.{}", self.smpe_env, self.maintained_pds)
    }

    /// `<remoteJclPds>(<member>)`
    pub fn jcl_member(&self, member: &str) -> String {
        format!("{}({})", self.remote_jcl_pds, member)
    }

    pub fn local_path(&self) -> String {
        format!("{}/{}", self.local_folder, self.local_file)
    }

    pub fn remote_path(&self) -> String {
        format!("{}/{}", self.remote_folder, self.remote_file)
    }

    /// Spool download directory for one job, e.g. `job-archive/apply`.
    pub fn archive_dir(&self, name: &str) -> String {
        format!("{}/{}", self.job_archive.trim_end_matches('/'), name)
    }
}
