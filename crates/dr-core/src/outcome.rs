//! Structured results reported to the calling workflow.
//!
//! The step communicates through stdout: exactly one result payload per
//! invocation, in the format selected by `--format`. Key names in the JSON
//! payloads are a stable contract for calling orchestrators.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported output formats for the result payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Structured JSON (default for machine consumption)
    #[default]
    Json,

    /// One-line summary for quick status checks
    Summary,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Success payload for a completed diff-report task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskReport {
    /// The output file is always (re)written, so a successful run always
    /// counts as a change.
    pub changed: bool,
    /// A diff artifact was created.
    pub diff_created: bool,
    /// Where the report was written.
    pub output_file: String,
}

impl TaskReport {
    /// Build the success payload for a report written to `output_file`.
    pub fn new(output_file: impl Into<String>) -> Self {
        Self {
            changed: true,
            diff_created: true,
            output_file: output_file.into(),
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"changed":true,"diff_created":true}"#.to_string())
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        format!("diff report written to {}", self.output_file)
    }
}

/// Failure payload carrying a human-readable message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskFailure {
    pub failed: bool,
    pub msg: String,
}

impl TaskFailure {
    /// Build the failure payload from an error message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            failed: true,
            msg: msg.into(),
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"failed":true,"msg":"serialization failed"}"#.to_string())
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        format!("failed: {}", self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_keys() {
        let json = TaskReport::new("/tmp/out.html").to_json();
        assert!(json.contains(r#""changed":true"#));
        assert!(json.contains(r#""diff_created":true"#));
        assert!(json.contains(r#""output_file":"/tmp/out.html""#));
    }

    #[test]
    fn test_failure_json_keys() {
        let json = TaskFailure::new("disk full").to_json();
        assert!(json.contains(r#""failed":true"#));
        assert!(json.contains(r#""msg":"disk full""#));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Summary.to_string(), "summary");
    }
}
