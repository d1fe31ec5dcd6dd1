use thiserror::Error;

use crate::subprocess::ProcessError;

/// Failure of a single maintenance task.
///
/// Every variant is terminal for the task that raised it. The only retry in
/// the system is the state poller, which retries on a state mismatch and
/// never on one of these errors.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// The process could not be launched, or it exited unsuccessfully.
    #[error("\nCommand:\n{command}\n{reason}")]
    Runner { command: String, reason: String },

    /// The process wrote to stderr. Any stderr output counts as failure,
    /// whatever the exit status was.
    #[error("\nCommand:\n{command}\n{stderr}")]
    Command { command: String, stderr: String },

    #[error("\nUnrecognized desired state of: {0}. Expected UP or DOWN.")]
    Validation(String),

    #[error("{resource} did not reach desired state of {desired} in the allotted time.")]
    Timeout { resource: String, desired: String },

    #[error("Job {dataset} did not complete successfully. Additional diagnostics:\n{payload}")]
    Job { dataset: String, payload: String },

    #[error("Unexpected output from '{command}': {detail}")]
    UnexpectedOutput { command: String, detail: String },

    #[error("Cancelled {0}")]
    Cancelled(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl OrchestratorError {
    pub fn runner(command: &str, error: ProcessError) -> Self {
        OrchestratorError::Runner {
            command: command.to_string(),
            reason: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_carries_command_and_stderr() {
        let err = OrchestratorError::Command {
            command: "zowe ops start resource CICSA".to_string(),
            stderr: "Unable to connect\n".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("zowe ops start resource CICSA"));
        assert!(message.contains("Unable to connect"));
    }

    #[test]
    fn test_runner_error_from_process_error() {
        let err = OrchestratorError::runner(
            "zowe ops show resource CICSA",
            ProcessError::CommandNotFound("zowe".to_string()),
        );
        assert!(matches!(err, OrchestratorError::Runner { .. }));
        assert!(err.to_string().contains("Command not found: zowe"));
    }

    #[test]
    fn test_timeout_names_resource_and_state() {
        let err = OrchestratorError::Timeout {
            resource: "CICSA".to_string(),
            desired: "UP".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "CICSA did not reach desired state of UP in the allotted time."
        );
    }
}
