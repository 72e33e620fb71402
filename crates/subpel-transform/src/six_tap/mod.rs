//! Six-tap (H.264 style) upsampling
//!
//! Half-pixel samples come from the six-tap filter in [`crate::kernel`],
//! applied horizontally, vertically, and then vertically again over the
//! horizontal half-pixel samples to fill the cell centers. For 4x output
//! the remaining quarter-pixel positions are averages of two neighboring
//! half-grid samples (see [`quadrant`]).
//!
//! Passes run strictly in sequence. The center pass reads a border-extended
//! copy of the output taken after the horizontal and vertical passes, and
//! the quadrant pass reads a frozen copy of the completed 2x grid.
//!
//! The last source row and column have no successor to interpolate
//! toward; they are copied, so the output's last row and column hold the
//! source pixels at every multiple of the magnitude.

mod passes;
mod quadrant;

use crate::{TransformError, TransformResult, upsampled_size};
use subpel_core::{BorderMode, Component, Raster};

/// 2x magnification
pub const MAGNITUDE_DOUBLE: u32 = 2;

/// 4x magnification
pub const MAGNITUDE_QUADRUPLE: u32 = 4;

/// Replicated border width; taps reach two pixels before and three after
/// the left (or upper) pixel of each half-pixel pair
pub(crate) const FILTER_MARGIN: u32 = 2;

/// Upsample a raster with the six-tap half-pixel filter.
///
/// # Arguments
/// * `image` - Input raster
/// * `magnitude` - [`MAGNITUDE_DOUBLE`] or [`MAGNITUDE_QUADRUPLE`]
///
/// # Returns
///
/// A raster of `((width - 1) * magnitude + 1) x ((height - 1) * magnitude + 1)`
/// with every source pixel at `(x * magnitude, y * magnitude)`.
///
/// # Errors
///
/// [`TransformError::InvalidInput`] for the empty raster and
/// [`TransformError::InvalidMagnitude`] for any magnitude other than 2 or 4.
///
/// # Examples
///
/// ```
/// use subpel_core::Raster;
/// use subpel_transform::upsample_six_tap;
///
/// let image = Raster::from_rows(&[[10u8, 20, 30, 40, 50, 60]]).unwrap();
/// let up = upsample_six_tap(&image, 2).unwrap();
///
/// assert_eq!(up.width(), 11);
/// assert_eq!(up.pixel(5, 0), Some(&[35u8][..]));
/// ```
#[tracing::instrument(
    level = "debug",
    skip(image),
    fields(width = image.width(), height = image.height(), channels = image.channels())
)]
pub fn upsample_six_tap<T: Component>(
    image: &Raster<T>,
    magnitude: u32,
) -> TransformResult<Raster<T>> {
    if image.is_empty() {
        return Err(TransformError::InvalidInput("image is empty"));
    }
    if magnitude != MAGNITUDE_DOUBLE && magnitude != MAGNITUDE_QUADRUPLE {
        return Err(TransformError::InvalidMagnitude {
            magnitude,
            method: "six-tap",
            expected: "2 or 4",
        });
    }

    let dims = image.dimensions();
    let (new_w, new_h) = upsampled_size(dims.0, dims.1, magnitude)?;
    let mut out = Raster::new(new_w, new_h, image.channels())?;

    let extended = image.add_border(FILTER_MARGIN, BorderMode::Replicate)?;
    passes::horizontal(&extended, dims, &mut out, magnitude);
    passes::vertical(&extended, dims, &mut out, magnitude);

    let half_grid = out.add_border(FILTER_MARGIN * magnitude, BorderMode::Replicate)?;
    passes::center(&half_grid, dims, &mut out, magnitude);

    if magnitude == MAGNITUDE_DOUBLE {
        return Ok(out);
    }

    let coarse = out.clone();
    quadrant::quadrant(&coarse, dims, &mut out);
    Ok(out)
}
