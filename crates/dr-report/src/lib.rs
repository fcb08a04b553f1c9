//! HTML diff report rendering.
//!
//! Turns two sequences of lines into a standalone HTML document containing a
//! two-column side-by-side diff table with collapsed context.
//!
//! # Pipeline
//!
//! - [`loader`]: read a file as lines, substituting a sentinel line when the
//!   file is absent (absence is data here, never an error)
//! - [`table`]: render the line alignment as an HTML table fragment
//! - [`document`]: wrap the fragment in a styled document and write it out
//!
//! # Example
//!
//! ```no_run
//! use dr_report::{assemble, read_file_lines, render_table, write_report};
//!
//! let before = read_file_lines("/etc/motd.before");
//! let after = read_file_lines("/etc/motd.after");
//! let table = render_table(&before, &after, "update motd");
//! let document = assemble(&table, "update motd");
//! write_report("/tmp/motd-diff.html", &document).unwrap();
//! ```

pub mod document;
pub mod error;
pub mod loader;
pub mod table;

pub use document::{assemble, write_report};
pub use error::{ReportError, Result};
pub use loader::read_file_lines;
pub use table::render_table;
