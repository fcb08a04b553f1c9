//! Side-by-side HTML diff table rendering.
//!
//! Renders a grouped line alignment as a four-column table: line number and
//! text for the before-file, line number and text for the after-file. Cell
//! classes mark the difference kind (`diff_add`, `diff_sub`, `diff_chg`);
//! elided context regions appear as a single `diff_next` marker row.

use dr_diff::{grouped_opcodes, OpTag, Opcode};
use tracing::debug;

/// Unchanged lines of context kept on each side of a change region.
const CONTEXT: usize = 5;

/// One rendered table cell: 1-based line number, text, and difference class.
struct Cell<'a> {
    lineno: usize,
    text: &'a str,
    class: Option<&'static str>,
}

/// Render the side-by-side diff table fragment for `before` and `after`.
///
/// Deterministic: identical inputs always produce byte-identical output.
/// Never fails; empty or identical inputs still yield a well-formed table.
pub fn render_table(before: &[String], after: &[String], label: &str) -> String {
    let groups = grouped_opcodes(before, after, CONTEXT);
    debug!(
        before_lines = before.len(),
        after_lines = after.len(),
        change_regions = groups.len(),
        "rendering diff table"
    );

    let mut html = String::new();
    html.push_str("<table class=\"diff\">\n");
    html.push_str(&format!(
        "<thead><tr><th class=\"diff_header\" colspan=\"2\">Before - {label}</th>\
<th class=\"diff_header\" colspan=\"2\">After - {label}</th></tr></thead>\n",
        label = escape(label)
    ));
    html.push_str("<tbody>\n");

    if groups.is_empty() && (!before.is_empty() || !after.is_empty()) {
        // Identical inputs: everything collapses into one context marker.
        push_next_marker(&mut html);
    }

    let mut shown_before = 0;
    let mut shown_after = 0;
    for group in &groups {
        let Some(first) = group.first() else { continue };
        if first.before.start > shown_before || first.after.start > shown_after {
            push_next_marker(&mut html);
        }
        for code in group {
            push_opcode_rows(&mut html, code, before, after);
        }
        if let Some(last) = group.last() {
            shown_before = last.before.end;
            shown_after = last.after.end;
        }
    }
    if !groups.is_empty() && (shown_before < before.len() || shown_after < after.len()) {
        push_next_marker(&mut html);
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

fn push_opcode_rows(html: &mut String, code: &Opcode, before: &[String], after: &[String]) {
    match code.tag {
        OpTag::Equal => {
            for offset in 0..code.before.len() {
                let i = code.before.start + offset;
                let j = code.after.start + offset;
                push_row(
                    html,
                    Some(Cell { lineno: i + 1, text: &before[i], class: None }),
                    Some(Cell { lineno: j + 1, text: &after[j], class: None }),
                );
            }
        }
        OpTag::Delete => {
            for i in code.before.clone() {
                push_row(
                    html,
                    Some(Cell { lineno: i + 1, text: &before[i], class: Some("diff_sub") }),
                    None,
                );
            }
        }
        OpTag::Insert => {
            for j in code.after.clone() {
                push_row(
                    html,
                    None,
                    Some(Cell { lineno: j + 1, text: &after[j], class: Some("diff_add") }),
                );
            }
        }
        OpTag::Replace => {
            if code.before.len() == code.after.len() {
                // Lines pair up positionally: mark each pair as changed.
                for offset in 0..code.before.len() {
                    let i = code.before.start + offset;
                    let j = code.after.start + offset;
                    push_row(
                        html,
                        Some(Cell { lineno: i + 1, text: &before[i], class: Some("diff_chg") }),
                        Some(Cell { lineno: j + 1, text: &after[j], class: Some("diff_chg") }),
                    );
                }
            } else {
                // No positional correspondence: removals, then additions.
                for i in code.before.clone() {
                    push_row(
                        html,
                        Some(Cell { lineno: i + 1, text: &before[i], class: Some("diff_sub") }),
                        None,
                    );
                }
                for j in code.after.clone() {
                    push_row(
                        html,
                        None,
                        Some(Cell { lineno: j + 1, text: &after[j], class: Some("diff_add") }),
                    );
                }
            }
        }
    }
}

fn push_row(html: &mut String, left: Option<Cell<'_>>, right: Option<Cell<'_>>) {
    html.push_str("<tr>");
    push_cell(html, left);
    push_cell(html, right);
    html.push_str("</tr>\n");
}

fn push_cell(html: &mut String, cell: Option<Cell<'_>>) {
    let Some(cell) = cell else {
        html.push_str("<td class=\"diff_lineno\"></td><td></td>");
        return;
    };
    html.push_str(&format!("<td class=\"diff_lineno\">{}</td>", cell.lineno));
    let text = escape(trim_newline(cell.text));
    match cell.class {
        Some(class) => html.push_str(&format!("<td class=\"{class}\">{text}</td>")),
        None => html.push_str(&format!("<td>{text}</td>")),
    }
}

fn push_next_marker(html: &mut String) {
    html.push_str("<tr><td class=\"diff_next\" colspan=\"4\">&hellip;</td></tr>\n");
}

fn trim_newline(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Minimal HTML escaping for text content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("\"x\""), "&quot;x&quot;");
    }

    #[test]
    fn trim_newline_handles_crlf() {
        assert_eq!(trim_newline("abc\r\n"), "abc");
        assert_eq!(trim_newline("abc\n"), "abc");
        assert_eq!(trim_newline("abc"), "abc");
    }
}
