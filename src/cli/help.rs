//! Help text generation and utilities

use crate::cli::args::Cli;
use crate::ops::Task;
use clap::CommandFactory;

/// Generate comprehensive help text for the CLI
pub fn generate_help() -> String {
    Cli::command().render_help().to_string()
}

/// One line per task: name, steps for composite tasks, description.
pub fn generate_task_list() -> String {
    let width = Task::ALL
        .iter()
        .map(|t| t.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Available tasks:\n");
    for task in Task::ALL {
        let steps = task.steps();
        let detail = if steps.len() > 1 {
            let names: Vec<&str> = steps.iter().map(|s| s.name()).collect();
            format!("{} ({})", task.description(), names.join(" -> "))
        } else {
            task.description().to_string()
        };
        out.push_str(&format!("  {:width$}  {}\n", task.name(), detail, width = width));
    }
    out
}

/// Get the log level description based on verbosity
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,tokio=debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_list_mentions_every_task() {
        let list = generate_task_list();
        for task in Task::ALL {
            assert!(list.contains(task.name()));
            assert!(list.contains(task.description()));
        }
        assert!(list.contains("stop2 -> stop1"));
        assert!(list.contains("start1 -> start2"));
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(get_log_level(0), "info");
        assert_eq!(get_log_level(1), "debug");
        assert_eq!(get_log_level(2), "trace");
    }

    #[test]
    fn test_help_lists_subcommands() {
        let help = generate_help();
        assert!(help.contains("run"));
        assert!(help.contains("tasks"));
    }
}
