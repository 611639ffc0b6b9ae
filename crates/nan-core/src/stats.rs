//! Derived statistics: variance, standard deviation and median
//!
//! `var` and `std` are built on [`mean_count`](crate::reduce::mean_count) and
//! make a second pass over the input, so they require an iterator that can be
//! cloned (slice iterators, arrays, `Vec` and most adaptors qualify).
//!
//! # Examples
//!
//! ```rust
//! use nan_core::stats::{median, std, var};
//!
//! let data = [1.0, 2.0, f64::NAN];
//! assert_eq!(var(data), 0.5);
//! assert!((std(data) - 0.7071067811865476).abs() < 1e-15);
//! assert_eq!(median([1.0, 2.0, 3.0, f64::NAN]), 2.0);
//! ```

use crate::numeric::NanFloat;
use crate::primitives::{NanPrimitives, ScalarBackend};

/// Unbiased (Bessel-corrected) sample variance of the non-NaN elements
///
/// NaN when there are no non-NaN elements. With exactly one the divisor is
/// zero and the result is NaN as well.
pub fn var<T, I>(data: I) -> T
where
    T: NanFloat,
    I: IntoIterator<Item = T>,
    I::IntoIter: Clone,
{
    NanPrimitives::<T>::var(&ScalarBackend, data)
}

/// Sample standard deviation of the non-NaN elements
pub fn std<T, I>(data: I) -> T
where
    T: NanFloat,
    I: IntoIterator<Item = T>,
    I::IntoIter: Clone,
{
    NanPrimitives::<T>::std(&ScalarBackend, data)
}

/// Median of the non-NaN elements
///
/// Odd counts return the middle element, even counts the mean of the two
/// middle elements. NaN when nothing remains after filtering.
pub fn median<T, I>(data: I) -> T
where
    T: NanFloat,
    I: IntoIterator<Item = T>,
{
    NanPrimitives::<T>::median(&ScalarBackend, data)
}
