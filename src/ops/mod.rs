//! Maintenance operations
//!
//! - `poller` - bounded linear wait for an SSM resource state
//! - `resource` - start/stop an SSM resource and wait for it to settle
//! - `job` - submit SMP/E JCL and check its completion code
//! - `sequencer` - run named steps in order, stopping at the first failure
//! - `task` - the catalogue of named tasks and the steps they expand to
//! - `orchestrator` - binds configuration to the operations above

pub mod job;
pub mod orchestrator;
pub mod poller;
pub mod resource;
pub mod sequencer;
pub mod task;

pub use job::{JobResult, JobSubmitter, DEFAULT_MAX_RETURN_CODE};
pub use orchestrator::Orchestrator;
pub use poller::{parse_current_state, PollPolicy, StatePoller};
pub use resource::{ResourceController, ResourceState};
pub use sequencer::run_sequence;
pub use task::{Step, Task};
