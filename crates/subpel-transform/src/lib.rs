//! subpel-transform - Integer-factor upsampling
//!
//! This crate provides two interchangeable upsampling strategies:
//!
//! - Bilinear interpolation, any magnitude >= 1
//! - Six-tap half-pixel filtering as used for H.264 sub-pixel motion
//!   compensation, magnitudes 2 and 4
//!
//! Both map a `W x H` raster to `((W-1)*m + 1) x ((H-1)*m + 1)` so that
//! every source pixel lands on a multiple of the magnitude and nothing is
//! extrapolated past the last row or column.

pub mod bilinear;
mod error;
pub mod kernel;
pub mod six_tap;
pub mod upsample;

pub use bilinear::upsample_bilinear;
pub use error::{TransformError, TransformResult};
pub use six_tap::{MAGNITUDE_DOUBLE, MAGNITUDE_QUADRUPLE, upsample_six_tap};
pub use upsample::{UpsampleMethod, upsample};

/// Output size of a `width x height` raster upsampled by `magnitude`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] for zero dimensions or
/// magnitude, or when the result doesn't fit in `u32`.
///
/// ```
/// assert_eq!(subpel_transform::upsampled_size(5, 3, 4).unwrap(), (17, 9));
/// ```
pub fn upsampled_size(width: u32, height: u32, magnitude: u32) -> TransformResult<(u32, u32)> {
    if width == 0 || height == 0 || magnitude == 0 {
        return Err(TransformError::InvalidParameters(format!(
            "cannot upsample {width}x{height} by {magnitude}"
        )));
    }
    let scaled = |n: u32| (n - 1).checked_mul(magnitude).and_then(|v| v.checked_add(1));
    match (scaled(width), scaled(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(TransformError::InvalidParameters(format!(
            "{width}x{height} upsampled by {magnitude} overflows"
        ))),
    }
}
