//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ops::Task;

/// Sequence mainframe maintenance tasks through the Zowe CLI
#[derive(Parser)]
#[command(name = "zmaint")]
#[command(about = "zmaint - SMP/E maintenance, APF authorization and SSM resource control via Zowe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to $ZMAINT_CONFIG, then ./config.json)
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one or more tasks in order, stopping at the first failure
    Run {
        /// Tasks to run (see `zmaint tasks`)
        #[arg(value_enum, required = true, num_args = 1..)]
        tasks: Vec<Task>,
    },
    /// List available tasks
    Tasks,
}
