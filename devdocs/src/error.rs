//! Error types for the devdocs application.

use thiserror::Error;

/// Main error type for devdocs operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DevdocsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bundle extraction failure.
    #[error("Extraction failed: {0}")]
    Extract(String),
}

/// Result type alias for devdocs operations.
pub type Result<T> = std::result::Result<T, DevdocsError>;
