//! Sample - one multi-channel pixel value
//!
//! A [`Sample`] holds one value per channel. Blending arithmetic is
//! defined on `Sample<f64>` and applies component-wise, so interpolation
//! formulas read as vector arithmetic:
//!
//! ```
//! use subpel_core::Sample;
//!
//! let a = Sample::new([10u8, 100]).to_f64();
//! let b = Sample::new([20u8, 200]).to_f64();
//! let mid = a.lerp(&b, 0.5);
//! assert_eq!(mid.round_to::<u8>().values(), &[15, 150]);
//! ```
//!
//! All samples of one raster share its channel count; combining samples
//! with different counts is a logic error and is caught by debug
//! assertions.

use crate::component::Component;
use smallvec::SmallVec;
use std::ops::{Add, Mul, Sub};

/// Inline capacity covers gray, gray+alpha, RGB and RGBA without allocating.
type Channels<T> = SmallVec<[T; 4]>;

/// One pixel: an ordered vector of per-channel values.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    values: Channels<T>,
}

impl<T: Component> Sample<T> {
    /// Create a sample from per-channel values.
    pub fn new<I: IntoIterator<Item = T>>(values: I) -> Self {
        Sample {
            values: values.into_iter().collect(),
        }
    }

    /// Create a sample with `channels` copies of `value`.
    pub fn splat(channels: u32, value: T) -> Self {
        Sample {
            values: smallvec::smallvec![value; channels as usize],
        }
    }

    /// Create a sample by copying a channel slice.
    pub fn from_slice(values: &[T]) -> Self {
        Sample {
            values: SmallVec::from_slice(values),
        }
    }

    /// Number of channels
    #[inline]
    pub fn channels(&self) -> u32 {
        self.values.len() as u32
    }

    /// Per-channel values
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Value of one channel, if it exists.
    #[inline]
    pub fn get(&self, channel: usize) -> Option<T> {
        self.values.get(channel).copied()
    }

    /// Apply `f` to every channel.
    pub fn map<U: Component>(&self, f: impl Fn(T) -> U) -> Sample<U> {
        Sample {
            values: self.values.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Combine two samples channel by channel.
    pub fn zip_map<U: Component>(&self, other: &Sample<T>, f: impl Fn(T, T) -> U) -> Sample<U> {
        debug_assert_eq!(self.values.len(), other.values.len(), "channel mismatch");
        Sample {
            values: self
                .values
                .iter()
                .zip(other.values.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Widen every channel to `f64` for blending.
    pub fn to_f64(&self) -> Sample<f64> {
        self.map(Component::to_f64)
    }
}

impl Sample<f64> {
    /// Narrow every channel to `T` (rounding and saturating for integral types).
    pub fn round_to<T: Component>(&self) -> Sample<T> {
        self.map(T::from_f64)
    }

    /// Linear interpolation `self + t * (other - self)`.
    pub fn lerp(&self, other: &Sample<f64>, t: f64) -> Sample<f64> {
        self.zip_map(other, |a, b| a + t * (b - a))
    }
}

impl Add<&Sample<f64>> for Sample<f64> {
    type Output = Sample<f64>;

    fn add(self, rhs: &Sample<f64>) -> Sample<f64> {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl Add for Sample<f64> {
    type Output = Sample<f64>;

    fn add(self, rhs: Sample<f64>) -> Sample<f64> {
        self + &rhs
    }
}

impl Sub for &Sample<f64> {
    type Output = Sample<f64>;

    fn sub(self, rhs: Self) -> Sample<f64> {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl Sub for Sample<f64> {
    type Output = Sample<f64>;

    fn sub(self, rhs: Sample<f64>) -> Sample<f64> {
        &self - &rhs
    }
}

impl Mul<f64> for Sample<f64> {
    type Output = Sample<f64>;

    fn mul(self, rhs: f64) -> Sample<f64> {
        self.map(|v| v * rhs)
    }
}

impl Mul<f64> for &Sample<f64> {
    type Output = Sample<f64>;

    fn mul(self, rhs: f64) -> Sample<f64> {
        self.map(|v| v * rhs)
    }
}
