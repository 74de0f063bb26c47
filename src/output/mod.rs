//! Output rendering and persistence
//!
//! Renders a `TreeDocument` with its fixed header block and writes the
//! result to the destination file.

mod writer;

pub use writer::{render, save, timestamp_now};
