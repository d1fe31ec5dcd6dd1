//! # zmaint
//!
//! Drives z/OS maintenance through the Zowe CLI: SMP/E receive, apply-check,
//! apply, reject and restore jobs, copying maintenance to the runtime
//! environment, uploading to USS, APF authorization, and starting or
//! stopping SSM managed resources.
//!
//! ## Usage
//!
//! ```bash
//! zmaint run stop receive apply-check apply copy apf start
//! ```
//!
//! ## Modules
//!
//! - `cli` - Argument parsing, routing and help output
//! - `config` - The immutable maintenance configuration and its loader
//! - `error` - Error taxonomy shared by every operation
//! - `ops` - State polling, resource control, job submission and task sequencing
//! - `subprocess` - Process execution abstraction with a scriptable mock
//! - `zowe` - Management CLI command construction and result classification
pub mod cli;
pub mod config;
pub mod error;
pub mod ops;
pub mod subprocess;
pub mod zowe;
