//! Pipeline orchestration: load, render, assemble, write.

use crate::outcome::TaskReport;
use crate::task::DiffTask;
use dr_report::{assemble, read_file_lines, render_table, write_report, Result};
use tracing::{debug, info};

/// Run a diff-report task end to end.
///
/// Input files that do not exist are represented as sentinel content rather
/// than errors, so the only failure surfaced here is the final report write.
/// The output file is written exactly once, at the very end; there are no
/// side effects to roll back on failure.
pub fn run_task(task: &DiffTask) -> Result<TaskReport> {
    debug!(before = %task.before_file, after = %task.after_file, "loading input files");
    let before = read_file_lines(&task.before_file);
    let after = read_file_lines(&task.after_file);

    let table = render_table(&before, &after, &task.label);
    let document = assemble(&table, &task.label);
    write_report(&task.output_file, &document)?;

    info!(output = %task.output_file, "diff report created");
    Ok(TaskReport::new(&task.output_file))
}
