//! Header rendering and timestamped file output

use std::io::Write;
use std::path::Path;

use chrono::Local;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::tree::TreeDocument;

const HEADER_TITLE: &str = "Directory Tree";
const SEPARATOR_WIDTH: usize = 50;

/// Local time formatted for the output header.
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Render the document with its header block.
///
/// The layout is fixed for compatibility: title, `Generated:` line, a
/// separator of exactly 50 `=` characters, a blank line, then the tree
/// lines joined by newline with no trailing newline.
pub fn render(doc: &TreeDocument, timestamp: &str) -> String {
    let mut out = String::new();
    out.push_str(HEADER_TITLE);
    out.push('\n');
    out.push_str("Generated: ");
    out.push_str(timestamp);
    out.push('\n');
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push_str("\n\n");
    out.push_str(&doc.lines.join("\n"));
    out
}

/// Write the rendered document to `dest`.
///
/// Content goes to a temp file in the destination's directory first and is
/// persisted over `dest` in one step, so a failed run leaves any existing
/// file untouched. Failures are not retried.
pub fn save(doc: &TreeDocument, timestamp: &str, dest: &Path) -> Result<()> {
    let content = render(doc, timestamp);
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let write_err = |source: std::io::Error| Error::Write {
        path: dest.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.persist(dest).map_err(|e| write_err(e.error))?;
    Ok(())
}
