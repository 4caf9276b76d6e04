//! Error types for vfsys.

use thiserror::Error;

/// Common error type for vfsys.
#[derive(Error, Debug)]
pub enum VfsError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Logging could not be initialized.
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type alias for vfsys operations.
pub type Result<T> = std::result::Result<T, VfsError>;
