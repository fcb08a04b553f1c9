//! Error types for report generation.

use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while producing a report.
///
/// Missing input files are deliberately not represented here: the loader
/// substitutes sentinel content instead, so the only failure a caller can
/// observe is the final write.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Writing the assembled document failed.
    #[error("failed to write report to '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
