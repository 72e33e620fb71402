//! Half-pixel filter passes
//!
//! All three passes read from rasters that already carry a replicated
//! border, so every tap is in bounds:
//!
//! - [`horizontal`] and [`vertical`] read the source extended by
//!   [`FILTER_MARGIN`] pixels.
//! - [`center`] reads a snapshot of the output taken after the first two
//!   passes, extended by `FILTER_MARGIN * magnitude` pixels.

use super::FILTER_MARGIN;
use crate::kernel::six_tap_sample;
use subpel_core::{Component, Raster};

/// Gather six pixels of `raster`, the `i`-th at `at(i)`.
fn gather<T: Component>(raster: &Raster<T>, at: impl Fn(u32) -> (u32, u32)) -> [&[T]; 6] {
    std::array::from_fn(|i| {
        let (x, y) = at(i as u32);
        raster.pixel_unchecked(x, y)
    })
}

/// Place the source pixels of every row and the horizontal half-pixel
/// samples between them. The last column is copied without filtering.
pub(super) fn horizontal<T: Component>(
    extended: &Raster<T>,
    (w, h): (u32, u32),
    out: &mut Raster<T>,
    magnitude: u32,
) {
    let half = magnitude / 2;
    for y in 0..h {
        let ey = y + FILTER_MARGIN;
        for x in 0..w - 1 {
            let ex = x + FILTER_MARGIN;
            let taps = gather(extended, |i| (ex + i - 2, ey));
            out.set_pixel_unchecked(x * magnitude, y * magnitude, taps[2]);
            let filtered = six_tap_sample(taps);
            out.set_pixel_unchecked(x * magnitude + half, y * magnitude, filtered.values());
        }
        let last = extended.pixel_unchecked(w - 1 + FILTER_MARGIN, ey);
        out.set_pixel_unchecked((w - 1) * magnitude, y * magnitude, last);
    }
    tracing::trace!(rows = h, "horizontal half-pixel pass done");
}

/// Place the source pixels of every column and the vertical half-pixel
/// samples between them. The last row is copied without filtering.
pub(super) fn vertical<T: Component>(
    extended: &Raster<T>,
    (w, h): (u32, u32),
    out: &mut Raster<T>,
    magnitude: u32,
) {
    let half = magnitude / 2;
    for x in 0..w {
        let ex = x + FILTER_MARGIN;
        for y in 0..h - 1 {
            let ey = y + FILTER_MARGIN;
            let taps = gather(extended, |i| (ex, ey + i - 2));
            out.set_pixel_unchecked(x * magnitude, y * magnitude, taps[2]);
            let filtered = six_tap_sample(taps);
            out.set_pixel_unchecked(x * magnitude, y * magnitude + half, filtered.values());
        }
        let last = extended.pixel_unchecked(ex, h - 1 + FILTER_MARGIN);
        out.set_pixel_unchecked(x * magnitude, (h - 1) * magnitude, last);
    }
    tracing::trace!(columns = w, "vertical half-pixel pass done");
}

/// Fill the center of every cell by filtering the horizontal half-pixel
/// samples of six consecutive source rows.
///
/// `half_grid` is the output of [`horizontal`] and [`vertical`] with a
/// replicated border of `FILTER_MARGIN * magnitude` pixels. Source row `r`
/// of the half-pixel column of cell `x` sits at
/// `((x + FILTER_MARGIN) * magnitude + magnitude / 2, (r + FILTER_MARGIN) * magnitude)`.
pub(super) fn center<T: Component>(
    half_grid: &Raster<T>,
    (w, h): (u32, u32),
    out: &mut Raster<T>,
    magnitude: u32,
) {
    let half = magnitude / 2;
    for y in 0..h - 1 {
        for x in 0..w - 1 {
            let col = (x + FILTER_MARGIN) * magnitude + half;
            // taps at source rows y-2 ..= y+3
            let taps = gather(half_grid, |i| (col, (y + i) * magnitude));
            out.set_pixel_unchecked(
                x * magnitude + half,
                y * magnitude + half,
                six_tap_sample(taps).values(),
            );
        }
    }
    tracing::trace!("center pass done");
}
