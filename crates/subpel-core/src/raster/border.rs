//! Border operations for rasters
//!
//! This module provides functions for adding and removing borders
//! (padding) around rasters:
//!
//! - Uniform borders (same size on all sides)
//! - General borders (different size per side)
//!
//! Added border pixels are filled according to a [`BorderMode`]. Filters
//! with a fixed support use [`BorderMode::Replicate`] so that every tap
//! near an edge reads a valid pixel.

use super::Raster;
use crate::component::Component;
use crate::error::{Error, Result};

/// How pixels outside the raster are synthesized
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderMode<T> {
    /// Copy the nearest edge pixel (`aaa|abcd|ddd`)
    Replicate,
    /// Mirror about the edge pixel without repeating it (`dcb|abcd|cba`)
    Reflect,
    /// Fill every channel with a constant value
    Constant(T),
}

/// Map a possibly out-of-range coordinate onto `[0, len)`.
///
/// Returns `None` for [`BorderMode::Constant`], where outside coordinates
/// have no source pixel. `len` must be non-zero.
pub fn map_index<T>(i: i64, len: u32, mode: &BorderMode<T>) -> Option<u32> {
    let last = len as i64 - 1;
    match mode {
        BorderMode::Constant(_) => (0..=last).contains(&i).then_some(i as u32),
        BorderMode::Replicate => Some(i.clamp(0, last) as u32),
        BorderMode::Reflect => {
            if len == 1 {
                return Some(0);
            }
            let period = 2 * last;
            let r = i.rem_euclid(period);
            let mirrored = if r <= last { r } else { period - r };
            Some(mirrored as u32)
        }
    }
}

impl<T: Component> Raster<T> {
    /// Add a uniform border around the raster.
    ///
    /// # Returns
    ///
    /// New raster with dimensions `(width + 2*npix, height + 2*npix)`.
    ///
    /// # Errors
    ///
    /// Same as [`Raster::add_border_general`].
    pub fn add_border(&self, npix: u32, mode: BorderMode<T>) -> Result<Raster<T>> {
        self.add_border_general(npix, npix, npix, npix, mode)
    }

    /// Add a general border with different sizes per side.
    ///
    /// # Arguments
    ///
    /// * `left` - Left border width
    /// * `right` - Right border width
    /// * `top` - Top border height
    /// * `bot` - Bottom border height
    /// * `mode` - How border pixels are filled
    ///
    /// # Returns
    ///
    /// New raster with dimensions `(width + left + right, height + top + bot)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullInput`] for the empty raster and
    /// [`Error::InvalidDimension`] if the new size overflows.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        mode: BorderMode<T>,
    ) -> Result<Raster<T>> {
        if self.is_empty() {
            return Err(Error::NullInput("cannot extend an empty raster"));
        }

        let overflow = Error::InvalidDimension {
            width: self.width,
            height: self.height,
        };
        let new_w = self
            .width
            .checked_add(left)
            .and_then(|w| w.checked_add(right))
            .ok_or_else(|| overflow.clone())?;
        let new_h = self
            .height
            .checked_add(top)
            .and_then(|h| h.checked_add(bot))
            .ok_or(overflow)?;

        let channels = self.channels as usize;
        let fill = match mode {
            BorderMode::Constant(v) => vec![v; channels],
            _ => Vec::new(),
        };

        // Column mapping is the same for every row
        let col_src: Vec<Option<u32>> = (0..new_w)
            .map(|x| map_index(x as i64 - left as i64, self.width, &mode))
            .collect();

        let mut data = Vec::with_capacity((new_w as usize) * (new_h as usize) * channels);
        for y in 0..new_h {
            let sy = map_index(y as i64 - top as i64, self.height, &mode);
            for &sx in &col_src {
                match (sx, sy) {
                    (Some(sx), Some(sy)) => data.extend_from_slice(self.pixel_unchecked(sx, sy)),
                    _ => data.extend_from_slice(&fill),
                }
            }
        }

        Raster::from_data(new_w, new_h, self.channels, data)
    }

    /// Remove a uniform border from the raster.
    ///
    /// # Returns
    ///
    /// New raster with dimensions `(width - 2*npix, height - 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns error if the border is not smaller than the raster.
    pub fn remove_border(&self, npix: u32) -> Result<Raster<T>> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Remove a general border with different sizes per side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the border consumes the whole
    /// raster.
    pub fn remove_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
    ) -> Result<Raster<T>> {
        let horiz = left as u64 + right as u64;
        let vert = top as u64 + bot as u64;
        if horiz >= self.width as u64 || vert >= self.height as u64 {
            return Err(Error::InvalidParameter(format!(
                "border ({left}, {right}, {top}, {bot}) too large for {}x{} raster",
                self.width, self.height
            )));
        }

        let new_w = self.width - left - right;
        let new_h = self.height - top - bot;
        let channels = self.channels as usize;
        let start = left as usize * channels;
        let end = start + new_w as usize * channels;

        let mut data = Vec::with_capacity((new_w as usize) * (new_h as usize) * channels);
        for y in top..top + new_h {
            data.extend_from_slice(&self.row(y)[start..end]);
        }

        Raster::from_data(new_w, new_h, self.channels, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_index_replicate() {
        let mode = BorderMode::<u8>::Replicate;
        assert_eq!(map_index(-3, 5, &mode), Some(0));
        assert_eq!(map_index(0, 5, &mode), Some(0));
        assert_eq!(map_index(4, 5, &mode), Some(4));
        assert_eq!(map_index(99, 5, &mode), Some(4));
    }

    #[test]
    fn test_map_index_reflect() {
        let mode = BorderMode::<u8>::Reflect;
        let cases = [(-4, 4), (-2, 2), (-1, 1), (0, 0), (4, 4), (5, 3), (6, 2), (8, 0)];
        for (i, expected) in cases {
            assert_eq!(map_index(i, 5, &mode), Some(expected), "index {i}");
        }
        for i in -3..=3 {
            assert_eq!(map_index(i, 1, &mode), Some(0));
        }
    }

    #[test]
    fn test_map_index_constant() {
        let mode = BorderMode::Constant(7u8);
        assert_eq!(map_index(-1, 5, &mode), None);
        assert_eq!(map_index(2, 5, &mode), Some(2));
        assert_eq!(map_index(5, 5, &mode), None);
    }

    #[test]
    fn test_add_border_empty_raster() {
        let raster = Raster::<u8>::empty(1).unwrap();
        assert!(matches!(
            raster.add_border(2, BorderMode::Replicate),
            Err(Error::NullInput(_))
        ));
    }

    #[test]
    fn test_remove_border_too_large() {
        let raster = Raster::<u8>::new(4, 4, 1).unwrap();
        assert!(raster.remove_border(2).is_err());
        assert!(raster.remove_border_general(0, 0, 3, 1).is_err());
        assert!(raster.remove_border_general(1, 2, 0, 0).is_ok());
    }
}
