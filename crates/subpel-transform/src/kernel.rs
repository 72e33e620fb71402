//! Fixed-point interpolation kernels
//!
//! The six-tap half-pixel filter from H.264 luma motion compensation,
//! `(E - 5F + 20G + 20H - 5I + J + 16) >> 5`, and the rounded two-sample
//! average used for quarter-pixel positions.
//!
//! Integral components use the integer rounding offsets and saturate to
//! their range. Floating components skip the offsets and divide exactly,
//! so a constant signal is a fixed point for every component type.

use subpel_core::{Component, Sample};

/// Six-tap filter coefficients
pub const SIX_TAP_KERNEL: [i32; 6] = [1, -5, 20, 20, -5, 1];

/// Rounding offset added before the division by [`SIX_TAP_DIVISOR`]
pub const SIX_TAP_ROUNDING: i64 = 16;

/// Sum of the six-tap coefficients
pub const SIX_TAP_DIVISOR: i64 = 32;

/// Apply the six-tap filter to six consecutive values.
///
/// The result interpolates the half-pixel position between `taps[2]` and
/// `taps[3]`.
///
/// ```
/// use subpel_transform::kernel::six_tap;
///
/// assert_eq!(six_tap([10u8, 20, 30, 40, 50, 60]), 35);
/// assert_eq!(six_tap([0.5f32; 6]), 0.5);
/// ```
pub fn six_tap<T: Component>(taps: [T; 6]) -> T {
    let sum: f64 = SIX_TAP_KERNEL
        .iter()
        .zip(taps)
        .map(|(&k, t)| k as f64 * t.to_f64())
        .sum();

    if T::INTEGRAL {
        // Integer inputs give an exact integer sum
        let acc = sum as i64 + SIX_TAP_ROUNDING;
        T::from_f64(acc.div_euclid(SIX_TAP_DIVISOR) as f64)
    } else {
        T::from_f64(sum / SIX_TAP_DIVISOR as f64)
    }
}

/// Apply the six-tap filter channel by channel to six neighboring pixels.
pub fn six_tap_sample<T: Component>(taps: [&[T]; 6]) -> Sample<T> {
    let channels = taps[0].len();
    Sample::new((0..channels).map(|c| six_tap(taps.map(|px| px[c]))))
}

/// Rounded average of two values.
///
/// Integral: `(a + b + 1) >> 1`. Floating: `(a + b) / 2`.
pub fn average<T: Component>(a: T, b: T) -> T {
    let sum = a.to_f64() + b.to_f64();
    if T::INTEGRAL {
        T::from_f64(((sum + 1.0) / 2.0).floor())
    } else {
        T::from_f64(sum / 2.0)
    }
}

/// Rounded average of two pixels, channel by channel.
pub fn average_sample<T: Component>(a: &[T], b: &[T]) -> Sample<T> {
    debug_assert_eq!(a.len(), b.len(), "channel mismatch");
    Sample::new(a.iter().zip(b).map(|(&a, &b)| average(a, b)))
}
