//! Directory tree traversal
//!
//! This module builds the text representation of a directory hierarchy:
//!
//! - `FilterConfig` decides which entries are visible
//! - `TreeBuilder` walks the hierarchy depth-first and produces a `TreeDocument`

mod builder;
mod config;
mod filter;

// Re-export public types
pub use builder::{TreeBuilder, TreeDocument};
pub use config::{DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_FILES, FilterConfig};
pub use filter::{EntryKind, should_ignore};
