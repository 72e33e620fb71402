//! Scalar channel types
//!
//! A [`Component`] is the numeric type of a single channel of a raster
//! sample. Interpolation is carried out in `f64` and narrowed back to the
//! component type with [`Component::from_f64`], which rounds and saturates
//! for integral types.

use std::fmt::Debug;

/// Numeric type of one raster channel.
pub trait Component: Copy + Default + PartialEq + PartialOrd + Debug + Send + Sync + 'static {
    /// Whether values are integers. Integral types round and saturate on
    /// narrowing and use integer rounding offsets in fixed-point kernels.
    const INTEGRAL: bool;

    /// Smallest representable value, as `f64`.
    const MIN: f64;

    /// Largest representable value, as `f64`.
    const MAX: f64;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`.
    ///
    /// Integral types round half away from zero and saturate to
    /// `[MIN, MAX]`. NaN narrows to zero.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_integral {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                const INTEGRAL: bool = true;
                const MIN: f64 = <$t>::MIN as f64;
                const MAX: f64 = <$t>::MAX as f64;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    // `as` maps NaN to 0
                    v.round()
                        .clamp(<Self as Component>::MIN, <Self as Component>::MAX)
                        as $t
                }
            }
        )*
    };
}

impl_integral!(u8, u16);

impl Component for f32 {
    const INTEGRAL: bool = false;
    const MIN: f64 = f32::MIN as f64;
    const MAX: f64 = f32::MAX as f64;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Component for f64 {
    const INTEGRAL: bool = false;
    const MIN: f64 = f64::MIN;
    const MAX: f64 = f64::MAX;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}
