//! Task configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for task validation.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Errors raised while validating a task, before any file I/O happens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// A required parameter carries no value.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// A single diff-report task: compare two files, write one HTML report.
///
/// All four fields are required strings. [`DiffTask::validate`] runs before
/// the pipeline touches the filesystem, so invalid usage never creates or
/// modifies the output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffTask {
    /// Path to the "before" file.
    pub before_file: String,
    /// Path to the "after" file.
    pub after_file: String,
    /// Human-readable label used in headings and titles.
    pub label: String,
    /// Path to write the resulting HTML report.
    pub output_file: String,
}

impl DiffTask {
    /// Check that every required parameter carries a non-empty value.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("before_file", &self.before_file),
            ("after_file", &self.after_file),
            ("label", &self.label),
            ("output_file", &self.output_file),
        ] {
            if value.trim().is_empty() {
                return Err(TaskError::MissingParameter(name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_task() -> DiffTask {
        DiffTask {
            before_file: "/tmp/a".to_string(),
            after_file: "/tmp/b".to_string(),
            label: "test".to_string(),
            output_file: "/tmp/out.html".to_string(),
        }
    }

    #[test]
    fn test_valid_task_passes() {
        assert!(valid_task().validate().is_ok());
    }

    #[test]
    fn test_empty_field_rejected() {
        let mut task = valid_task();
        task.label = String::new();
        assert_eq!(
            task.validate(),
            Err(TaskError::MissingParameter("label"))
        );
    }

    #[test]
    fn test_whitespace_only_field_rejected() {
        let mut task = valid_task();
        task.output_file = "   ".to_string();
        assert_eq!(
            task.validate(),
            Err(TaskError::MissingParameter("output_file"))
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let task = valid_task();
        let json = serde_json::to_string(&task).unwrap();
        let parsed: DiffTask = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.before_file, task.before_file);
        assert_eq!(parsed.output_file, task.output_file);
    }
}
