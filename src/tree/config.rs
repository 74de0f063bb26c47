//! Filter configuration and built-in defaults

use std::collections::HashSet;

/// Directory base names excluded by default.
pub const DEFAULT_IGNORED_DIRS: [&str; 4] = [".git", "__pycache__", "node_modules", ".venv"];

/// File names and `*.ext` suffix patterns excluded by default.
pub const DEFAULT_IGNORED_FILES: [&str; 5] = [".DS_Store", "*.pyc", "*.pyo", "*.pyd", ".env"];

/// Which entries are excluded from the tree.
///
/// Constructed once per run and passed explicitly; both sets are fixed for
/// the duration of a traversal.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Exact directory base names to prune. Contents of a pruned directory
    /// are never visited.
    pub ignored_dirs: HashSet<String>,
    /// Exact file names, or suffix patterns of the form `*.ext`.
    pub ignored_files: HashSet<String>,
}

impl FilterConfig {
    /// A configuration that excludes nothing.
    pub fn empty() -> Self {
        Self {
            ignored_dirs: HashSet::new(),
            ignored_files: HashSet::new(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            ignored_files: DEFAULT_IGNORED_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
