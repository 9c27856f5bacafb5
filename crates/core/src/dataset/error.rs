//! Error types for dataset I/O

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or writing dataset files
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Input file absent; nothing has been read or written
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Underlying filesystem failure
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid JSON of the expected shape
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record inside the document is unusable
    #[error("{}: record {index}: {reason}", .path.display())]
    InvalidRecord {
        path: PathBuf,
        index: usize,
        reason: String,
    },
}
