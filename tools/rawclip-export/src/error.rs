//! Export error types.

use thiserror::Error;

/// Errors surfaced by the clip text writer.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A checked precondition failed before any output was written
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The destination could not be created, or a write failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
