//! Error types for treesnap.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that terminate a run.
///
/// Enumeration failures below the root are not represented here: the
/// builder degrades them to an inline placeholder line and keeps going.
#[derive(Error, Debug)]
pub enum Error {
    /// The root path is missing or is not a directory. Checked before any
    /// traversal begins.
    #[error("not a directory: {}", path.display())]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The output destination could not be created or written. The
    /// destination is left untouched when this is returned.
    #[error("failed to write output to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for treesnap operations.
pub type Result<T> = std::result::Result<T, Error>;
