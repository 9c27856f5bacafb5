//! Error types for catalog generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Filesystem failure while writing an output file
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failure
    #[error("serialization error: {0}")]
    Serialization(String),
}
