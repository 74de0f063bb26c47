//! Entry filtering for tree traversal

use super::config::FilterConfig;

/// Filesystem entry classification.
///
/// Classification comes from `DirEntry::file_type()`, which does not follow
/// symlinks: a symlink to a directory is `Symlink`, not `Directory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Symlink of any target kind. Filtered like a file, never traversed.
    Symlink,
    /// Sockets, devices, and other special files. Filtered like a file.
    Other,
}

impl EntryKind {
    pub fn is_directory(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// Check whether an entry should be excluded from the tree.
///
/// Directories match by exact name only. Everything else matches
/// `ignored_files` by exact name, or by literal suffix when the pattern has
/// the single-wildcard form `*<suffix>`. The suffix comparison is
/// case-sensitive and exact: `foo.pyco` does not match `*.pyc`.
pub fn should_ignore(name: &str, kind: EntryKind, config: &FilterConfig) -> bool {
    if kind.is_directory() {
        return config.ignored_dirs.contains(name);
    }
    config.ignored_files.iter().any(|pattern| {
        name == pattern
            || pattern
                .strip_prefix('*')
                .is_some_and(|suffix| name.ends_with(suffix))
    })
}
