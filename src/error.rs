use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for memoir
///
/// These cover the only fatal paths in the application: failures while
/// loading a suggestion catalog before the terminal UI is initialized.
/// Everything after startup degrades gracefully instead of erroring.
#[derive(Debug, Error)]
pub enum MemoirError {
    #[error("Catalog file not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("Invalid catalog file {path}: {message}")]
    CatalogParse { path: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
