//! CLI command handlers
//!
//! - Argument parsing structures
//! - Command routing
//! - Help text and task listing

pub mod args;
pub mod help;
pub mod router;

pub use args::{Cli, Commands};
pub use help::{generate_help, generate_task_list, get_log_level};
pub use router::execute_command;
