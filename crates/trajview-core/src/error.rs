//! Error types for trajview-rs.

use thiserror::Error;

/// The main error type for trajview-rs operations.
#[derive(Error, Debug)]
pub enum TrajviewError {
    /// I/O error (typically an unreadable trajectory file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering error.
    #[error("render error: {0}")]
    Render(String),
}

/// A specialized Result type for trajview-rs operations.
pub type Result<T> = std::result::Result<T, TrajviewError>;
