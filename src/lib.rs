//! Treesnap - snapshot a directory tree to a timestamped text file

pub mod error;
pub mod output;
pub mod tree;

pub use error::Error;
pub use output::{render, save, timestamp_now};
pub use tree::{EntryKind, FilterConfig, TreeBuilder, TreeDocument, should_ignore};
