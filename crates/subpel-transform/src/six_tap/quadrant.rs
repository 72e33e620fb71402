//! Quarter-pixel averaging for 4x upsampling
//!
//! After the half-pixel pipeline, the 4x output holds valid samples at
//! every even coordinate. Within the 4x4 block of each source cell those
//! are
//!
//! ```text
//!   G . b . H        G, H, M   source pixels
//!   . . . . .        b, h      half-pixel samples
//!   h . j . m        j         center sample
//!   . . . . .        m, s      half-pixel samples of the next cells
//!   M . s . .
//! ```
//!
//! and every odd position is the rounded average of two of them, given by
//! [`INTERIOR`]. The last row and column of the output lack the
//! neighbors below or to the right and use the reduced tables
//! [`LAST_ROW`] and [`LAST_COLUMN`].

use crate::kernel::average_sample;
use subpel_core::{Component, Raster};

/// Block size of the 4x grid
const BLOCK: u32 = 4;

/// One averaged position: `target` gets the average of `from[0]` and `from[1]`.
/// Offsets are `(dx, dy)` relative to the block origin.
#[derive(Debug, Clone, Copy)]
pub(super) struct QuarterTap {
    target: (u32, u32),
    from: [(u32, u32); 2],
}

const fn tap(target: (u32, u32), a: (u32, u32), b: (u32, u32)) -> QuarterTap {
    QuarterTap {
        target,
        from: [a, b],
    }
}

const G: (u32, u32) = (0, 0);
const B: (u32, u32) = (2, 0);
const H: (u32, u32) = (4, 0);
const HH: (u32, u32) = (0, 2);
const J: (u32, u32) = (2, 2);
const M: (u32, u32) = (4, 2);
const MM: (u32, u32) = (0, 4);
const S: (u32, u32) = (2, 4);

/// Adjacency table for a block with neighbors on all sides
pub(super) const INTERIOR: [QuarterTap; 12] = [
    tap((1, 0), G, B),
    tap((3, 0), B, H),
    tap((0, 1), G, HH),
    tap((1, 1), B, HH),
    tap((2, 1), B, J),
    tap((3, 1), B, M),
    tap((1, 2), HH, J),
    tap((3, 2), J, M),
    tap((0, 3), HH, MM),
    tap((1, 3), HH, S),
    tap((2, 3), J, S),
    tap((3, 3), M, S),
];

/// Blocks on the last output row only have the row itself
pub(super) const LAST_ROW: [QuarterTap; 2] = [INTERIOR[0], INTERIOR[1]];

/// Blocks on the last output column only have the column itself
pub(super) const LAST_COLUMN: [QuarterTap; 2] = [INTERIOR[2], INTERIOR[8]];

fn fill_block<T: Component>(
    coarse: &Raster<T>,
    out: &mut Raster<T>,
    (bx, by): (u32, u32),
    table: &[QuarterTap],
) {
    for t in table {
        let [(ax, ay), (cx, cy)] = t.from;
        let avg = average_sample(
            coarse.pixel_unchecked(bx + ax, by + ay),
            coarse.pixel_unchecked(bx + cx, by + cy),
        );
        out.set_pixel_unchecked(bx + t.target.0, by + t.target.1, avg.values());
    }
}

/// Fill the odd positions of a 4x output from the completed 2x grid in
/// `coarse`. `(w, h)` are the source dimensions.
pub(super) fn quadrant<T: Component>(
    coarse: &Raster<T>,
    (w, h): (u32, u32),
    out: &mut Raster<T>,
) {
    for y in 0..h - 1 {
        for x in 0..w - 1 {
            fill_block(coarse, out, (x * BLOCK, y * BLOCK), &INTERIOR);
        }
    }

    let last_y = (h - 1) * BLOCK;
    for x in 0..w - 1 {
        fill_block(coarse, out, (x * BLOCK, last_y), &LAST_ROW);
    }

    let last_x = (w - 1) * BLOCK;
    for y in 0..h - 1 {
        fill_block(coarse, out, (last_x, y * BLOCK), &LAST_COLUMN);
    }
    tracing::trace!("quadrant pass done");
}
