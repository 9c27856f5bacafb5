//! Error types for image renaming

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while renaming images
#[derive(Debug, Error)]
pub enum RenameError {
    /// Target directory does not exist
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The discovery pattern could not be compiled
    #[error("invalid file pattern {0}")]
    Pattern(String),

    /// A rename step failed
    #[error("failed to rename {} -> {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
