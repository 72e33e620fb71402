//! Synthetic test rasters

use subpel_core::Raster;

/// Diagonal gradient: channel `c` of pixel (x, y) is
/// `(x * 7 + y * 13 + c * 50) % 256`.
pub fn gradient(width: u32, height: u32, channels: u32) -> Raster<u8> {
    let mut data = Vec::with_capacity((width * height * channels) as usize);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                data.push(((x * 7 + y * 13 + c * 50) % 256) as u8);
            }
        }
    }
    Raster::from_data(width, height, channels, data).expect("valid gradient geometry")
}

/// Single-channel checkerboard of `cell x cell` squares alternating
/// between `lo` and `hi`.
pub fn checkerboard(width: u32, height: u32, cell: u32, lo: u8, hi: u8) -> Raster<u8> {
    let cell = cell.max(1);
    let data = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| if (x / cell + y / cell) % 2 == 0 { lo } else { hi })
        })
        .collect();
    Raster::from_data(width, height, 1, data).expect("valid checkerboard geometry")
}
