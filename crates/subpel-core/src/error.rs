//! Error types for subpel-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// subpel-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid channel count
    #[error("invalid channel count: {0}")]
    InvalidChannels(u32),

    /// Data buffer does not match the raster geometry
    #[error("data length {actual} doesn't match {width}x{height}x{channels} = {expected}")]
    DataLength {
        width: u32,
        height: u32,
        channels: u32,
        expected: usize,
        actual: usize,
    },

    /// Coordinates out of bounds
    #[error("index out of bounds: ({x}, {y}) outside {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Sample channel count differs from the raster's
    #[error("channel mismatch: expected {expected}, got {actual}")]
    ChannelMismatch { expected: u32, actual: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Empty input
    #[error("null or empty input: {0}")]
    NullInput(&'static str),
}

/// Result type alias for subpel-core operations
pub type Result<T> = std::result::Result<T, Error>;
