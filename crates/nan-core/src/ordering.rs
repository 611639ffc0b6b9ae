//! Scalar NaN-aware minimum and maximum
//!
//! These follow the IEEE-754-2008 `minNum`/`maxNum` rules: a single NaN
//! operand is ignored, two NaN operands give NaN, and signed zeros are
//! ordered (`-0.0 < +0.0`). Integer types have no NaN and fall back to
//! ordinary [`Ord`] comparisons.
//!
//! # Examples
//!
//! ```rust
//! use nan_core::ordering::{max, min};
//!
//! assert_eq!(min(f64::NAN, 0.0), 0.0);
//! assert_eq!(max(f64::NAN, 0.0), 0.0);
//! assert_eq!(min(1, 2), 1);
//! assert!(min(0.0f64, -0.0).is_sign_negative());
//! ```

use num_traits::Float;

/// Two-argument ordering that never lets a single NaN win
pub trait NanOrd: Copy + PartialOrd {
    /// Smaller of the two values, ignoring a NaN operand
    fn nan_min(self, other: Self) -> Self;

    /// Larger of the two values, ignoring a NaN operand
    fn nan_max(self, other: Self) -> Self;
}

#[inline]
fn float_min<T: Float>(x: T, y: T) -> T {
    if x.is_nan() {
        return y;
    }
    if y.is_nan() {
        return x;
    }
    if x == y {
        // Only distinguishable when the operands are zeros of opposite sign.
        if x.is_sign_negative() {
            x
        } else {
            y
        }
    } else if x < y {
        x
    } else {
        y
    }
}

#[inline]
fn float_max<T: Float>(x: T, y: T) -> T {
    if x.is_nan() {
        return y;
    }
    if y.is_nan() {
        return x;
    }
    if x == y {
        if x.is_sign_positive() {
            x
        } else {
            y
        }
    } else if x > y {
        x
    } else {
        y
    }
}

macro_rules! impl_nan_ord_float {
    ($($t:ty),*) => {
        $(
            impl NanOrd for $t {
                #[inline]
                fn nan_min(self, other: Self) -> Self {
                    float_min(self, other)
                }

                #[inline]
                fn nan_max(self, other: Self) -> Self {
                    float_max(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_nan_ord_int {
    ($($t:ty),*) => {
        $(
            impl NanOrd for $t {
                #[inline]
                fn nan_min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                #[inline]
                fn nan_max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )*
    };
}

impl_nan_ord_float!(f32, f64);
impl_nan_ord_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// IEEE-754-2008 minimum of two values
#[inline]
pub fn min<T: NanOrd>(x: T, y: T) -> T {
    x.nan_min(y)
}

/// IEEE-754-2008 maximum of two values
#[inline]
pub fn max<T: NanOrd>(x: T, y: T) -> T {
    x.nan_max(y)
}
