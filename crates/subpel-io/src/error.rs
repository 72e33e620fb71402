//! Error types for subpel-io

use thiserror::Error;

/// Errors that can occur while reading or writing rasters
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] subpel_core::Error),

    /// Decode, encode or file error reported by the codec
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Channel count with no matching image layout
    #[error("unsupported channel count: {0} (expected 1 to 4)")]
    UnsupportedChannels(u32),

    /// Empty raster passed for encoding
    #[error("cannot encode an empty raster")]
    EmptyRaster,
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
