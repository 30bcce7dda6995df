//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types.
//! Callers at the application edge are free to wrap them in `anyhow`.

use thiserror::Error;

/// Errors that can occur while parsing or following a path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Empty path segment at position {0}")]
    EmptySegment(usize),

    #[error("Cannot read segment '{segment}' of a missing value at '{path}'")]
    Unreachable { path: String, segment: String },
}

/// Errors that can occur while converting data into a `Value`
#[derive(Error, Debug)]
pub enum ValueError {
    #[error("Failed to serialize value: {0}")]
    Serialization(#[from] serde_json::Error),
}
