//! TreeBuilder - depth-first traversal producing formatted tree lines

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::config::FilterConfig;
use super::filter::{EntryKind, should_ignore};

/// One filtered child entry, classified and ready for sorting.
#[derive(Debug)]
struct Entry {
    name: String,
    kind: EntryKind,
    path: PathBuf,
}

/// The ordered output of one traversal run, before serialization.
///
/// The first line is the resolved root path; every following line is
/// `prefix + connector + name`. Produced by [`TreeBuilder::build`] and
/// consumed immutably by the output writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeDocument {
    /// Canonicalized root the traversal started from.
    pub root: PathBuf,
    /// Rendered rows in emission order.
    pub lines: Vec<String>,
}

/// Depth-first tree builder.
///
/// Traversal is strictly sequential; sibling order is deterministic
/// (directories before files, then case-insensitive name ascending).
/// Symlinked directories are listed but never followed, which also rules
/// out symlink cycles.
pub struct TreeBuilder {
    config: FilterConfig,
    max_depth: Option<usize>,
}

impl TreeBuilder {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            max_depth: None,
        }
    }

    /// Descend only `depth` levels below the root. Directories at the
    /// boundary are still listed, just not entered.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Build the tree document for `root`.
    ///
    /// Fails only when the root itself is missing or not a directory.
    /// Enumeration failures below the root degrade to a placeholder line
    /// at the failing position; the rest of the traversal continues.
    pub fn build(&self, root: &Path) -> Result<TreeDocument> {
        let root = root.canonicalize().map_err(|source| Error::InvalidRoot {
            path: root.to_path_buf(),
            source: Some(source),
        })?;
        if !root.is_dir() {
            return Err(Error::InvalidRoot {
                path: root,
                source: None,
            });
        }

        let mut lines = vec![root.display().to_string()];
        self.visit(&root, "", 0, &mut lines);
        Ok(TreeDocument { root, lines })
    }

    fn visit(&self, dir: &Path, prefix: &str, depth: usize, lines: &mut Vec<String>) {
        let entries = match self.read_children(dir) {
            Ok(entries) => entries,
            Err(_) => {
                lines.push(format!("{prefix}└── [Permission Denied]"));
                return;
            }
        };

        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == entries.len() - 1;
            let connector = if is_last { "└── " } else { "├── " };
            lines.push(format!("{prefix}{connector}{}", entry.name));

            if entry.kind.is_directory() && !self.at_max_depth(depth + 1) {
                let continuation = if is_last { "    " } else { "│   " };
                self.visit(
                    &entry.path,
                    &format!("{prefix}{continuation}"),
                    depth + 1,
                    lines,
                );
            }
        }
    }

    fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }

    /// List, classify, filter, and sort the children of `dir`.
    ///
    /// Any listing failure is returned whole; the caller renders it as a
    /// single placeholder line instead of aborting the run. Filtered-out
    /// entries are dropped before sorting, so they never count toward the
    /// "last sibling" position.
    fn read_children(&self, dir: &Path) -> std::io::Result<Vec<Entry>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let kind = if file_type.is_symlink() {
                EntryKind::Symlink
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if should_ignore(&name, kind, &self.config) {
                continue;
            }
            children.push(Entry {
                name,
                kind,
                path: entry.path(),
            });
        }

        // Stable sort keeps enumeration order for case-insensitive ties
        children.sort_by_key(|e| (!e.kind.is_directory(), e.name.to_lowercase()));
        Ok(children)
    }
}
