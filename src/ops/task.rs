//! Named tasks
//!
//! A [`Task`] is what an operator asks for on the command line. Each task
//! expands to one or more [`Step`]s, the single operations the orchestrator
//! knows how to run. Composite tasks are just longer step lists.

use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Task {
    #[value(name = "apf")]
    Apf,
    #[value(name = "apply")]
    Apply,
    #[value(name = "apply-check")]
    ApplyCheck,
    #[value(name = "copy")]
    Copy,
    #[value(name = "receive")]
    Receive,
    #[value(name = "reject")]
    Reject,
    #[value(name = "restore")]
    Restore,
    #[value(name = "start1")]
    Start1,
    #[value(name = "start2")]
    Start2,
    #[value(name = "stop1")]
    Stop1,
    #[value(name = "stop2")]
    Stop2,
    #[value(name = "upload")]
    Upload,
    #[value(name = "start")]
    Start,
    #[value(name = "stop")]
    Stop,
}

/// A single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Apf,
    Apply,
    ApplyCheck,
    Copy,
    Receive,
    Reject,
    Restore,
    Start1,
    Start2,
    Stop1,
    Stop2,
    Upload,
}

impl Task {
    pub const ALL: [Task; 14] = [
        Task::Apf,
        Task::Apply,
        Task::ApplyCheck,
        Task::Copy,
        Task::Receive,
        Task::Reject,
        Task::Restore,
        Task::Start1,
        Task::Start2,
        Task::Stop1,
        Task::Stop2,
        Task::Upload,
        Task::Start,
        Task::Stop,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Task::Start => "start",
            Task::Stop => "stop",
            Task::Apf => Step::Apf.name(),
            Task::Apply => Step::Apply.name(),
            Task::ApplyCheck => Step::ApplyCheck.name(),
            Task::Copy => Step::Copy.name(),
            Task::Receive => Step::Receive.name(),
            Task::Reject => Step::Reject.name(),
            Task::Restore => Step::Restore.name(),
            Task::Start1 => Step::Start1.name(),
            Task::Start2 => Step::Start2.name(),
            Task::Stop1 => Step::Stop1.name(),
            Task::Stop2 => Step::Stop2.name(),
            Task::Upload => Step::Upload.name(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Task::Apf => "APF authorize dataset",
            Task::Apply => "Apply Maintenance",
            Task::ApplyCheck => "Apply Check Maintenance",
            Task::Copy => "Copy Maintenance to Runtime",
            Task::Receive => "Receive Maintenance",
            Task::Reject => "Reject Maintenance",
            Task::Restore => "Restore Maintenance",
            Task::Start1 => "Start SSM managed resource1",
            Task::Start2 => "Start SSM managed resource2",
            Task::Stop1 => "Stop SSM managed resource1",
            Task::Stop2 => "Stop SSM managed resource2",
            Task::Upload => "Upload Maintenance to USS",
            Task::Start => "Start SSM managed resources",
            Task::Stop => "Stop SSM managed resources",
        }
    }

    /// Steps in execution order. Resource 2 depends on resource 1, so
    /// `start` brings up 1 before 2 and `stop` takes down 2 before 1.
    pub fn steps(&self) -> Vec<Step> {
        match self {
            Task::Start => vec![Step::Start1, Step::Start2],
            Task::Stop => vec![Step::Stop2, Step::Stop1],
            Task::Apf => vec![Step::Apf],
            Task::Apply => vec![Step::Apply],
            Task::ApplyCheck => vec![Step::ApplyCheck],
            Task::Copy => vec![Step::Copy],
            Task::Receive => vec![Step::Receive],
            Task::Reject => vec![Step::Reject],
            Task::Restore => vec![Step::Restore],
            Task::Start1 => vec![Step::Start1],
            Task::Start2 => vec![Step::Start2],
            Task::Stop1 => vec![Step::Stop1],
            Task::Stop2 => vec![Step::Stop2],
            Task::Upload => vec![Step::Upload],
        }
    }

    /// Flatten several tasks into one ordered step list.
    pub fn plan(tasks: &[Task]) -> Vec<Step> {
        tasks.iter().flat_map(Task::steps).collect()
    }
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Apf => "apf",
            Step::Apply => "apply",
            Step::ApplyCheck => "apply-check",
            Step::Copy => "copy",
            Step::Receive => "receive",
            Step::Reject => "reject",
            Step::Restore => "restore",
            Step::Start1 => "start1",
            Step::Start2 => "start2",
            Step::Stop1 => "stop1",
            Step::Stop2 => "stop2",
            Step::Upload => "upload",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_value_enum() {
        for task in Task::ALL {
            let parsed = Task::from_str(task.name(), false).unwrap();
            assert_eq!(parsed, task);
        }
        assert_eq!(Task::value_variants().len(), Task::ALL.len());
        assert!(Task::from_str("pause", false).is_err());
    }

    #[test]
    fn test_composite_order() {
        assert_eq!(Task::Start.steps(), [Step::Start1, Step::Start2]);
        assert_eq!(Task::Stop.steps(), [Step::Stop2, Step::Stop1]);
    }

    #[test]
    fn test_plan_flattens_in_order() {
        let plan = Task::plan(&[Task::Stop, Task::Copy, Task::Apf, Task::Start]);
        let names: Vec<&str> = plan.iter().map(Step::name).collect();
        assert_eq!(
            names,
            ["stop2", "stop1", "copy", "apf", "start1", "start2"]
        );
    }

    #[test]
    fn test_single_tasks_map_to_same_named_step() {
        for task in Task::ALL {
            if matches!(task, Task::Start | Task::Stop) {
                continue;
            }
            assert_eq!(task.steps().len(), 1);
            assert_eq!(task.steps()[0].name(), task.name());
        }
    }
}
