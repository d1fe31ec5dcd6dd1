//! Command routing and execution

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use crate::cli::args::Commands;
use crate::cli::help::{generate_help, generate_task_list};
use crate::config::ConfigLoader;
use crate::ops::{Orchestrator, Task};
use crate::subprocess::SubprocessManager;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Option<Commands>, config: Option<PathBuf>) -> Result<()> {
    match command {
        Some(Commands::Run { tasks }) => run_tasks(&tasks, config).await,
        Some(Commands::Tasks) => {
            print!("{}", generate_task_list());
            Ok(())
        }
        None => {
            print!("{}", generate_help());
            Ok(())
        }
    }
}

async fn run_tasks(tasks: &[Task], config: Option<PathBuf>) -> Result<()> {
    let loader = ConfigLoader::from_env(config);
    let config = loader
        .load()
        .await
        .with_context(|| format!("Failed to load {}", loader.path().display()))?;

    let cancel = CancellationToken::new();
    spawn_interrupt_handler(cancel.clone());

    let orchestrator = Orchestrator::new(config, &SubprocessManager::production(), cancel);
    orchestrator.run_tasks(tasks).await?;

    tracing::info!(
        "Completed: {}",
        tasks.iter().map(Task::name).collect::<Vec<_>>().join(", ")
    );
    Ok(())
}

/// Cancel `token` on Ctrl-C so an in-progress state wait stops early.
fn spawn_interrupt_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, cancelling");
            token.cancel();
        }
    });
}
