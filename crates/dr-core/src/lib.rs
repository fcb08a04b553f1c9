//! Diff report core - orchestration shell for the HTML diff step.
//!
//! Wires the rendering pipeline to the outside world:
//! - Task configuration with up-front validation
//! - Pipeline orchestration (load, render, assemble, write)
//! - Structured success/failure results for the calling workflow
//! - Stable exit codes and logging setup

pub mod exit_codes;
pub mod logging;
pub mod outcome;
pub mod runner;
pub mod task;

pub use exit_codes::ExitCode;
pub use outcome::{OutputFormat, TaskFailure, TaskReport};
pub use runner::run_task;
pub use task::{DiffTask, TaskError};
