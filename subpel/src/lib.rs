//! subpel - Integer-factor raster upsampling
//!
//! Enlarges rasters by an integer magnitude with one of two interpolators:
//!
//! - Bilinear blending of the four surrounding samples (any magnitude)
//! - The H.264 six-tap half-pixel filter followed by quarter-pixel
//!   averaging (magnitude 2 or 4)
//!
//! In both cases the output is `((W - 1) * m + 1) x ((H - 1) * m + 1)` and
//! every source sample lands unchanged at `(x * m, y * m)`.
//!
//! # Example
//!
//! ```
//! use subpel::Raster;
//! use subpel::transform::{UpsampleMethod, upsample};
//!
//! let image = Raster::from_rows(&[[10u8, 20], [30, 40]]).unwrap();
//! let up = upsample(&image, 2, UpsampleMethod::Bilinear).unwrap();
//! assert_eq!(up.dimensions(), (3, 3));
//! assert_eq!(up.pixel(1, 1), Some(&[25u8][..]));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use subpel_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use subpel_io as io;
pub use subpel_transform as transform;
