//! Success/failure classification of a management CLI invocation.

use crate::error::{OrchestratorError, Result};
use crate::subprocess::{ProcessCommand, ProcessError, ProcessOutput};

/// Turn a runner result into the command's stdout or a typed failure.
///
/// Checked in order: a runner error or unsuccessful exit status, then any
/// stderr output (even with exit status zero), then success.
pub fn classify(
    command: &ProcessCommand,
    result: std::result::Result<ProcessOutput, ProcessError>,
) -> Result<String> {
    let text = command.display();

    let output = result.map_err(|e| OrchestratorError::runner(&text, e))?;

    if !output.status.success() {
        let mut reason = format!("Process failed with {}", output.status);
        if !output.stderr.is_empty() {
            reason.push('\n');
            reason.push_str(&output.stderr);
        }
        return Err(OrchestratorError::Runner {
            command: text,
            reason,
        });
    }

    if !output.stderr.is_empty() {
        return Err(OrchestratorError::Command {
            command: text,
            stderr: output.stderr,
        });
    }

    Ok(output.stdout)
}
