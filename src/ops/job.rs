use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{OrchestratorError, Result};
use crate::zowe::ZoweCli;

pub const DEFAULT_MAX_RETURN_CODE: u32 = 0;

/// Completed job, taken from the `data` object of a `--rfj` response.
#[derive(Debug, Clone)]
pub struct JobResult {
    pub jobid: Option<String>,
    pub jobname: Option<String>,
    pub return_code: u32,
    pub data: Value,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    data: Option<Value>,
}

fn text_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Numeric part of a `CC nnnn` completion code. Abends and JCL errors
/// have no numeric code and yield `None`.
pub fn parse_return_code(retcode: &str) -> Option<u32> {
    let mut parts = retcode.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("CC"), Some(code), None) => code.parse().ok(),
        _ => None,
    }
}

pub struct JobSubmitter {
    cli: Arc<dyn ZoweCli>,
}

impl JobSubmitter {
    pub fn new(cli: Arc<dyn ZoweCli>) -> Self {
        Self { cli }
    }

    /// Submit `dataset`, download its spool under `output_dir`, and accept
    /// the job when its completion code is at most `max_return_code`.
    pub async fn submit_job(
        &self,
        dataset: &str,
        output_dir: &str,
        max_return_code: u32,
    ) -> Result<JobResult> {
        info!("Submitting {} (spool to {})", dataset, output_dir);
        let stdout = self.cli.submit_job(dataset, output_dir).await?;

        let command = || self.cli.submit_job_command(dataset, output_dir).display();

        let response: SubmitResponse =
            serde_json::from_str(&stdout).map_err(|e| OrchestratorError::UnexpectedOutput {
                command: command(),
                detail: format!("response is not JSON: {e}"),
            })?;

        let data = response
            .data
            .filter(Value::is_object)
            .ok_or_else(|| OrchestratorError::UnexpectedOutput {
                command: command(),
                detail: "response has no 'data' object".to_string(),
            })?;

        let jobid = text_field(&data, "jobid");
        let jobname = text_field(&data, "jobname");
        let retcode = text_field(&data, "retcode");
        let return_code = retcode.as_deref().and_then(parse_return_code);

        match return_code {
            Some(code) if code <= max_return_code => {
                info!(
                    "Job {} {} completed with {}",
                    jobname.as_deref().unwrap_or("?"),
                    jobid.as_deref().unwrap_or("?"),
                    retcode.as_deref().unwrap_or_default()
                );
                Ok(JobResult {
                    jobid,
                    jobname,
                    return_code: code,
                    data,
                })
            }
            _ => {
                warn!(
                    "Job for {} ended with {} (max allowed CC {:04})",
                    dataset,
                    retcode.as_deref().unwrap_or("no return code"),
                    max_return_code
                );
                let payload =
                    serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
                Err(OrchestratorError::Job {
                    dataset: dataset.to_string(),
                    payload,
                })
            }
        }
    }
}
