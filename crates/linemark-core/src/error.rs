//! Error types for linemark
//!
//! Classification and inline formatting are total functions over arbitrary
//! input; errors only arise on the I/O and serialization surface.

use thiserror::Error;

/// Main error type for linemark operations
#[derive(Error, Debug)]
pub enum LinemarkError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Render error during output generation
    #[error("Render error: {0}")]
    Render(String),

    /// Serialization error when emitting the block AST
    #[error("Serialize error: {0}")]
    Serialize(String),
}

/// Result type alias for linemark operations
pub type Result<T> = std::result::Result<T, LinemarkError>;
