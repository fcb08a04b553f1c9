//! Line loading with sentinel substitution for missing files.

use std::path::Path;
use tracing::debug;

/// Read a file as a sequence of lines, each retaining its newline terminator.
///
/// A missing (or unreadable) file is represented as a single sentinel line
/// rather than an error, so the diff still renders meaningfully: comparing
/// against a sentinel shows the other file as entirely added or removed.
///
/// Known smell, preserved for compatibility with existing workflows: the
/// sentinel is plain diff content, so a real file that happens to contain
/// exactly this text is indistinguishable from an absent one.
///
/// Non-UTF-8 content is decoded lossily and diffed best-effort.
pub fn read_file_lines(path: impl AsRef<Path>) -> Vec<String> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) => split_lines(&String::from_utf8_lossy(&bytes)),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "input not readable, substituting sentinel");
            vec![format!("[File not found: {}]\n", path.display())]
        }
    }
}

/// Split text into lines, keeping each line's terminator. A final
/// unterminated line is kept as-is.
fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_sentinel() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        let lines = read_file_lines(&path);
        assert_eq!(lines, vec![format!("[File not found: {}]\n", path.display())]);
    }

    #[test]
    fn lines_retain_terminators() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("f.txt");
        fs::write(&path, "a\nb\nc\n").unwrap();
        assert_eq!(read_file_lines(&path), vec!["a\n", "b\n", "c\n"]);
    }

    #[test]
    fn final_unterminated_line_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("f.txt");
        fs::write(&path, "a\nb").unwrap();
        assert_eq!(read_file_lines(&path), vec!["a\n", "b"]);
    }

    #[test]
    fn empty_file_yields_empty_sequence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(read_file_lines(&path).is_empty());
    }

    #[test]
    fn non_utf8_content_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.dat");
        fs::write(&path, [0x61, 0xff, 0x0a, 0x62]).unwrap();
        let lines = read_file_lines(&path);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('a'));
        assert!(lines[0].ends_with('\n'));
    }
}
