//! Error types for gridscope.

use thiserror::Error;

/// The main error type for gridscope operations.
///
/// Selection, display-state, and geometry operations are total (absent keys
/// resolve to defaults, out-of-range values are clamped); errors only arise
/// at the registration and configuration surfaces.
#[derive(Error, Debug)]
pub enum GridscopeError {
    /// A grid with the given name is already registered.
    #[error("grid '{0}' already registered")]
    GridExists(String),

    /// A grid with the given name was not found.
    #[error("grid '{0}' not found")]
    GridNotFound(String),

    /// Grid data size does not match the declared extent.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for gridscope operations.
pub type Result<T> = std::result::Result<T, GridscopeError>;
