//! Pixel access functions
//!
//! Bounds-checked reads return `Option` so callers can treat "off the edge
//! of the raster" as a missing neighbor instead of relying on a sentinel
//! value. Writes return `Result` and also check the channel count.

use super::Raster;
use crate::component::Component;
use crate::error::{Error, Result};
use crate::sample::Sample;

impl<T: Component> Raster<T> {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * self.channels as usize
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Get the channel values of the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[T]> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let start = self.offset(x, y);
        Some(&self.data[start..start + self.channels as usize])
    }

    /// Get the pixel at (x, y) as a [`Sample`].
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_sample(&self, x: u32, y: u32) -> Option<Sample<T>> {
        self.pixel(x, y).map(Sample::from_slice)
    }

    /// Get the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel_unchecked(&self, x: u32, y: u32) -> &[T] {
        let start = self.offset(x, y);
        &self.data[start..start + self.channels as usize]
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds
    /// and [`Error::ChannelMismatch`] if the sample has the wrong number of
    /// channels.
    pub fn set_sample(&mut self, x: u32, y: u32, sample: &Sample<T>) -> Result<()> {
        self.set_pixel(x, y, sample.values())
    }

    /// Set the pixel at (x, y) from a channel slice.
    ///
    /// # Errors
    ///
    /// Same as [`Raster::set_sample`].
    pub fn set_pixel(&mut self, x: u32, y: u32, values: &[T]) -> Result<()> {
        if !self.in_bounds(x, y) {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if values.len() != self.channels as usize {
            return Err(Error::ChannelMismatch {
                expected: self.channels,
                actual: values.len() as u32,
            });
        }
        let start = self.offset(x, y);
        self.data[start..start + values.len()].copy_from_slice(values);
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds or `values` has the wrong
    /// length.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, values: &[T]) {
        let start = self.offset(x, y);
        self.data[start..start + self.channels as usize].copy_from_slice(values);
    }

    /// Get the interleaved data of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[T] {
        let stride = (self.width as usize) * (self.channels as usize);
        let start = (y as usize) * stride;
        &self.data[start..start + stride]
    }

    /// Iterate over all pixels as `(x, y, channels)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, &[T])> + '_ {
        let width = self.width.max(1);
        self.data
            .chunks_exact(self.channels as usize)
            .enumerate()
            .map(move |(i, px)| ((i as u32) % width, (i as u32) / width, px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_access() {
        let mut raster = Raster::<u8>::new(4, 3, 2).unwrap();
        raster.set_sample(3, 2, &Sample::new([9, 8])).unwrap();
        assert_eq!(raster.pixel(3, 2), Some(&[9u8, 8][..]));
        assert_eq!(raster.get_sample(3, 2), Some(Sample::new([9, 8])));
        assert_eq!(raster.pixel_unchecked(3, 2), &[9, 8]);
        assert_eq!(raster.get_sample(0, 0), Some(Sample::new([0, 0])));
    }

    #[test]
    fn test_pixel_access_out_of_bounds() {
        let mut raster = Raster::<f32>::new(4, 3, 1).unwrap();
        assert!(raster.pixel(4, 0).is_none());
        assert!(raster.get_sample(0, 3).is_none());
        assert!(matches!(
            raster.set_pixel(4, 3, &[1.0]),
            Err(Error::IndexOutOfBounds { x: 4, y: 3, .. })
        ));
    }

    #[test]
    fn test_channel_mismatch() {
        let mut raster = Raster::<u8>::new(2, 2, 3).unwrap();
        let err = raster.set_sample(0, 0, &Sample::new([1, 2])).unwrap_err();
        assert_eq!(
            err,
            Error::ChannelMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_row_and_pixels() {
        let raster = Raster::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(raster.row(1), &[4, 5, 6]);

        let collected: Vec<(u32, u32, u8)> =
            raster.pixels().map(|(x, y, px)| (x, y, px[0])).collect();
        assert_eq!(collected[0], (0, 0, 1));
        assert_eq!(collected[4], (1, 1, 5));
        assert_eq!(collected.len(), 6);
    }
}
