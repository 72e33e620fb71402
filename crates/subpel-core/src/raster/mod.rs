//! Raster - multi-channel image container
//!
//! `Raster<T>` is a 2D grid of samples, each with the same number of
//! channels of component type `T`.
//!
//! See [`access`] for per-pixel reads and writes and [`border`] for
//! border extension.
//!
//! # Examples
//!
//! ```
//! use subpel_core::{Raster, Sample};
//!
//! // Create a 4x3 RGB raster
//! let mut raster = Raster::<u8>::new(4, 3, 3).unwrap();
//!
//! raster.set_sample(1, 2, &Sample::new([255, 0, 0])).unwrap();
//! assert_eq!(raster.pixel(1, 2), Some(&[255u8, 0, 0][..]));
//! assert!(raster.get_sample(4, 0).is_none());
//! ```
//!
//! # Memory Layout
//!
//! Data is stored in row-major order with channels interleaved and no
//! padding. Channel `c` of the pixel at (x, y) is at index
//! `(y * width + x) * channels + c`.

pub mod access;
pub mod border;

use crate::component::Component;
use crate::error::{Error, Result};
use crate::sample::Sample;

/// Multi-channel raster image
///
/// `channels` is fixed at construction and is always non-zero. A raster
/// with zero area only exists as [`Raster::empty`], which stands for "no
/// image" and is rejected by operations that need pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T> {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Components per pixel
    channels: u32,
    /// Pixel data (row-major, interleaved channels)
    data: Vec<T>,
}

impl<T: Component> Raster<T> {
    /// Create a new raster with all components set to the default value (zero)
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `channels` - Components per pixel (must be > 0)
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0 and
    /// `Error::InvalidChannels` if channels is 0.
    pub fn new(width: u32, height: u32, channels: u32) -> Result<Self> {
        let size = Self::checked_size(width, height, channels)?;
        Ok(Raster {
            width,
            height,
            channels,
            data: vec![T::default(); size],
        })
    }

    /// Create a new raster with every pixel set to `sample`
    ///
    /// The channel count is taken from the sample.
    pub fn new_with_sample(width: u32, height: u32, sample: &Sample<T>) -> Result<Self> {
        let channels = sample.channels();
        let size = Self::checked_size(width, height, channels)?;

        let mut data = Vec::with_capacity(size);
        for _ in 0..(width as usize) * (height as usize) {
            data.extend_from_slice(sample.values());
        }

        Ok(Raster {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a raster from raw interleaved data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions or channel count are invalid or the
    /// data length doesn't match `width * height * channels`.
    pub fn from_data(width: u32, height: u32, channels: u32, data: Vec<T>) -> Result<Self> {
        let expected = Self::checked_size(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::DataLength {
                width,
                height,
                channels,
                expected,
                actual: data.len(),
            });
        }

        Ok(Raster {
            width,
            height,
            channels,
            data,
        })
    }

    /// Create a single-channel raster from rows of values
    ///
    /// Convenient for small fixtures. All rows must have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;

        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for row in rows {
            let row = row.as_ref();
            if row.len() as u32 != width {
                return Err(Error::InvalidParameter(format!(
                    "ragged rows: expected length {}, got {}",
                    width,
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        Self::from_data(width, height, 1, data)
    }

    /// Create the empty raster, standing for "no image"
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidChannels` if channels is 0.
    pub fn empty(channels: u32) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidChannels(channels));
        }
        Ok(Raster {
            width: 0,
            height: 0,
            channels,
            data: Vec::new(),
        })
    }

    fn checked_size(width: u32, height: u32, channels: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if channels == 0 {
            return Err(Error::InvalidChannels(channels));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels as usize))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the raster width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of channels per pixel
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Get the raster dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether this is the empty raster
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the raw interleaved data
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Get mutable access to the raw interleaved data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the raster and return its data
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Check whether two rasters have the same width, height and channels
    pub fn sizes_equal<U: Component>(&self, other: &Raster<U>) -> bool {
        self.width == other.width && self.height == other.height && self.channels == other.channels
    }

    /// Convert every component to another type
    ///
    /// Values go through `f64`, so narrowing to an integral type rounds
    /// and saturates.
    pub fn map_components<U: Component>(&self) -> Raster<U> {
        Raster {
            width: self.width,
            height: self.height,
            channels: self.channels,
            data: self.data.iter().map(|&v| U::from_f64(v.to_f64())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::<u8>::new(100, 200, 3).unwrap();
        assert_eq!(raster.width(), 100);
        assert_eq!(raster.height(), 200);
        assert_eq!(raster.channels(), 3);
        assert_eq!(raster.dimensions(), (100, 200));
        assert_eq!(raster.data().len(), 100 * 200 * 3);
        assert!(raster.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_raster_invalid_geometry() {
        assert!(Raster::<u8>::new(0, 10, 1).is_err());
        assert!(Raster::<u8>::new(10, 0, 1).is_err());
        assert_eq!(
            Raster::<u8>::new(10, 10, 0).unwrap_err(),
            Error::InvalidChannels(0)
        );
    }

    #[test]
    fn test_raster_with_sample() {
        let s = Sample::new([1u16, 2]);
        let raster = Raster::new_with_sample(3, 2, &s).unwrap();
        assert_eq!(raster.channels(), 2);
        assert_eq!(raster.data(), &[1, 2, 1, 2, 1, 2, 1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn test_raster_from_data_wrong_size() {
        let err = Raster::<f32>::from_data(3, 2, 1, vec![0.0; 5]).unwrap_err();
        assert!(matches!(
            err,
            Error::DataLength {
                expected: 6,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_raster_from_rows() {
        let raster = Raster::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(raster.channels(), 1);
        assert_eq!(raster.data(), &[1, 2, 3, 4, 5, 6]);

        let ragged: [&[u8]; 2] = [&[1, 2], &[3]];
        assert!(Raster::from_rows(&ragged).is_err());
    }

    #[test]
    fn test_empty_raster() {
        let raster = Raster::<u8>::empty(3).unwrap();
        assert!(raster.is_empty());
        assert_eq!(raster.channels(), 3);
        assert!(raster.data().is_empty());
        assert!(!Raster::<u8>::new(1, 1, 1).unwrap().is_empty());
        assert_eq!(
            Raster::<u8>::empty(0).unwrap_err(),
            Error::InvalidChannels(0)
        );
    }

    #[test]
    fn test_map_components() {
        let raster = Raster::from_rows(&[[-1.0f32, 0.4, 254.6, 300.0]]).unwrap();
        let narrowed: Raster<u8> = raster.map_components();
        assert_eq!(narrowed.data(), &[0, 0, 255, 255]);
        assert!(narrowed.sizes_equal(&raster));
    }
}
