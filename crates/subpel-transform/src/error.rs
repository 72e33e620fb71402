//! Error types for subpel-transform

use thiserror::Error;

/// Errors that can occur during upsampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] subpel_core::Error),

    /// Missing or empty input image
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Magnitude not accepted by the chosen method
    #[error("invalid magnitude {magnitude} for {method} upsampling: expected {expected}")]
    InvalidMagnitude {
        magnitude: u32,
        method: &'static str,
        expected: &'static str,
    },

    /// Invalid transformation parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
