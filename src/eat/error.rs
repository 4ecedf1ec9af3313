//! Custom error types for the eatshow crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum EatError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A required database file could not be opened. The tool is useless
    /// without its database, so this terminates the run.
    #[error("cannot access the file: {}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The echo file could not be opened. Non-fatal; output degrades to
    /// console only.
    #[error("file {} could not be opened!", path.display())]
    EchoOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The tail offset recorded in the index did not address a readable
    /// line in the data file.
    #[error("{0}: bad address index file")]
    BadAddress(u64),
}

/// A convenience `Result` type alias using the crate's `EatError` type.
pub type Result<T> = std::result::Result<T, EatError>;
