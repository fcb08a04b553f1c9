//! Report document assembly and output.

use crate::error::{ReportError, Result};
use crate::table::escape;
use std::path::Path;
use tracing::info;

/// Embedded style rules for the report document.
///
/// Difference colors are a fixed part of the report contract:
/// additions light green (#aaffaa), deletions light red (#ffaaaa),
/// changes light yellow (#ffff77), elided context light gray (#c0c0c0),
/// headers light gray (#f0f0f0).
const STYLE: &str = "\
body { font-family: monospace; }
table.diff { font-size: 12px; border: 1px solid #ccc; border-collapse: collapse; width: 100%; }
.diff_header { background-color: #f0f0f0; text-align: center; font-weight: bold; }
td.diff_lineno { background-color: #f0f0f0; text-align: right; color: #666; width: 3em; }
.diff_next { background-color: #c0c0c0; text-align: center; }
.diff_add { background-color: #aaffaa; }
.diff_chg { background-color: #ffff77; }
.diff_sub { background-color: #ffaaaa; }
td { vertical-align: top; padding: 2px 5px; }
";

/// Wrap a rendered diff table in a complete, styled HTML document.
///
/// Pure string composition; the label is escaped before it reaches the
/// heading and title.
pub fn assemble(table: &str, label: &str) -> String {
    let label = escape(label);
    format!(
        "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>Diff for Command: {label}</title>\n\
<style>\n{STYLE}</style>\n\
</head>\n\
<body>\n\
<h2>Diff for Command: {label}</h2>\n\
{table}\
</body>\n\
</html>\n"
    )
}

/// Write the assembled document to `path`, overwriting any existing file.
pub fn write_report(path: impl AsRef<Path>, document: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, document).map_err(|source| ReportError::WriteFailed {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), bytes = document.len(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_contains_heading_and_table() {
        let doc = assemble("<table class=\"diff\"></table>\n", "test");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<h2>Diff for Command: test</h2>"));
        assert!(doc.contains("<table class=\"diff\">"));
    }

    #[test]
    fn assemble_escapes_label() {
        let doc = assemble("", "<script>alert(1)</script>");
        assert!(!doc.contains("<script>"));
        assert!(doc.contains("&lt;script&gt;"));
    }

    #[test]
    fn assemble_embeds_difference_colors() {
        let doc = assemble("", "x");
        for color in ["#aaffaa", "#ffaaaa", "#ffff77", "#c0c0c0", "#f0f0f0"] {
            assert!(doc.contains(color), "style must define {color}");
        }
    }

    #[test]
    fn write_report_fails_on_missing_directory() {
        let err = write_report("/nonexistent-dir-for-test/report.html", "x").unwrap_err();
        assert!(err.to_string().contains("failed to write report"));
    }
}
