//! Bilinear upsampling
//!
//! Each source pixel `a` spans a cell with its right neighbor `b`, lower
//! neighbor `c` and diagonal neighbor `d`. The `magnitude x magnitude`
//! sub-positions of the cell are blended from those four samples:
//!
//! ```text
//! a ---- b        top    = a + w (b - a)
//! |  p   |        bottom = c + w (d - c)
//! c ---- d        p      = top + h (bottom - top)
//! ```
//!
//! with `w = l / magnitude` and `h = k / magnitude` for the sub-position
//! `(l, k)`. Cells on the last column fall back to vertical interpolation,
//! cells on the last row to horizontal interpolation, and the bottom-right
//! pixel is copied. Nothing is extrapolated past the last row or column.

use crate::{TransformError, TransformResult, upsampled_size};
use subpel_core::{Component, Raster, Sample};

/// Upsample a raster by bilinear interpolation.
///
/// # Arguments
/// * `image` - Input raster
/// * `magnitude` - Integer scale factor, at least 1
///
/// # Returns
///
/// A raster of `((width - 1) * magnitude + 1) x ((height - 1) * magnitude + 1)`
/// with every source pixel at `(x * magnitude, y * magnitude)`.
///
/// # Errors
///
/// [`TransformError::InvalidInput`] for the empty raster and
/// [`TransformError::InvalidMagnitude`] when `magnitude` is 0.
///
/// # Examples
///
/// ```
/// use subpel_core::Raster;
/// use subpel_transform::upsample_bilinear;
///
/// let image = Raster::from_rows(&[[10.0f64, 20.0], [30.0, 40.0]]).unwrap();
/// let up = upsample_bilinear(&image, 2).unwrap();
///
/// assert_eq!(up.dimensions(), (3, 3));
/// assert_eq!(up.pixel(1, 1), Some(&[25.0][..]));
/// ```
#[tracing::instrument(
    level = "debug",
    skip(image),
    fields(width = image.width(), height = image.height(), channels = image.channels())
)]
pub fn upsample_bilinear<T: Component>(
    image: &Raster<T>,
    magnitude: u32,
) -> TransformResult<Raster<T>> {
    if image.is_empty() {
        return Err(TransformError::InvalidInput("image is empty"));
    }
    if magnitude < 1 {
        return Err(TransformError::InvalidMagnitude {
            magnitude,
            method: "bilinear",
            expected: "at least 1",
        });
    }

    let (w, h) = image.dimensions();
    let (new_w, new_h) = upsampled_size(w, h, magnitude)?;
    let mut out = Raster::new(new_w, new_h, image.channels())?;
    let scale = magnitude as f64;

    let neighbor = |x: u32, y: u32| image.get_sample(x, y).map(|s| s.to_f64());

    for y in 0..h {
        for x in 0..w {
            let a = Sample::from_slice(image.pixel_unchecked(x, y)).to_f64();
            let b = neighbor(x + 1, y);
            let c = neighbor(x, y + 1);
            let d = neighbor(x + 1, y + 1);

            // Sub-positions past the last row/column would land outside the output
            let rows = if c.is_some() { magnitude } else { 1 };
            let cols = if b.is_some() { magnitude } else { 1 };

            for k in 0..rows {
                let hf = k as f64 / scale;
                for l in 0..cols {
                    let wf = l as f64 / scale;
                    let blended = match (&b, &c, &d) {
                        (Some(b), Some(c), Some(d)) => {
                            let top = a.lerp(b, wf);
                            let bottom = c.lerp(d, wf);
                            top.lerp(&bottom, hf)
                        }
                        (None, Some(c), _) => a.lerp(c, hf),
                        (Some(b), None, _) => a.lerp(b, wf),
                        _ => a.clone(),
                    };
                    out.set_pixel_unchecked(
                        x * magnitude + l,
                        y * magnitude + k,
                        blended.round_to::<T>().values(),
                    );
                }
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_bilinear_2x2_closed_form() {
        let image = Raster::from_rows(&[[10.0f64, 20.0], [30.0, 40.0]]).unwrap();
        let up = upsample_bilinear(&image, 2).unwrap();
        assert_eq!(up.dimensions(), (3, 3));

        let expected = [
            [10.0, 15.0, 20.0],
            [20.0, 25.0, 30.0],
            [30.0, 35.0, 40.0],
        ];
        for (y, row) in expected.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                let got = up.pixel(x as u32, y as u32).unwrap()[0];
                assert!(approx(got, v), "({x}, {y}): expected {v}, got {got}");
            }
        }
    }

    #[test]
    fn test_bilinear_fractional_offsets_are_real_valued() {
        let image = Raster::from_rows(&[[0.0f32, 3.0]]).unwrap();
        let up = upsample_bilinear(&image, 3).unwrap();
        assert_eq!(up.data(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_bilinear_magnitude_one_is_identity() {
        let image = Raster::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        let up = upsample_bilinear(&image, 1).unwrap();
        assert_eq!(up, image);
    }

    #[test]
    fn test_bilinear_rounds_integral_components() {
        // 0 -> 1 at quarter steps: 0.25, 0.5, 0.75 round to 0, 1, 1
        let image = Raster::from_rows(&[[0u8, 1]]).unwrap();
        let up = upsample_bilinear(&image, 4).unwrap();
        assert_eq!(up.data(), &[0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_bilinear_single_pixel() {
        let image = Raster::from_data(1, 1, 3, vec![7u8, 8, 9]).unwrap();
        let up = upsample_bilinear(&image, 5).unwrap();
        assert_eq!(up, image);
    }

    #[test]
    fn test_bilinear_rejects_bad_input() {
        let image = Raster::<u8>::new(2, 2, 1).unwrap();
        assert!(matches!(
            upsample_bilinear(&image, 0),
            Err(TransformError::InvalidMagnitude { magnitude: 0, .. })
        ));
        assert!(matches!(
            upsample_bilinear(&Raster::<u8>::empty(1).unwrap(), 2),
            Err(TransformError::InvalidInput(_))
        ));
    }
}
