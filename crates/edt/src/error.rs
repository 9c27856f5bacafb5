//! CLI error type

use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("merge error: {0}")]
    MergeError(String),

    #[error("catalog error: {0}")]
    CatalogError(String),

    #[error("rename error: {0}")]
    RenameError(String),
}
