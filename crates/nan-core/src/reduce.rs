//! Linear NaN-skipping reductions
//!
//! Single-pass folds using the reference [`ScalarBackend`]. Each accepts any
//! `IntoIterator`, so arrays, vectors, slice iterators and lazy adaptors all
//! work directly:
//!
//! ```rust
//! use nan_core::reduce::{extrema, maximum, mean, minimum, sum};
//!
//! let data = vec![1.0, 2.0, f64::NAN];
//! assert_eq!(sum(data.iter().copied()), 3.0);
//! assert_eq!(mean(data.iter().copied()), 1.5);
//! assert_eq!(maximum(data.iter().copied()), 2.0);
//! assert_eq!(minimum(data.iter().copied()), 1.0);
//! assert_eq!(extrema(data), (1.0, 2.0));
//! ```
//!
//! Degenerate input (empty or all-NaN) never panics; it yields NaN. Only
//! [`sum`] additionally logs a warning in that case.

use crate::numeric::NanFloat;
use crate::primitives::{NanPrimitives, ScalarBackend};

/// Sum of the non-NaN elements; NaN plus a logged warning if there are none
pub fn sum<T, I>(data: I) -> T
where
    T: NanFloat,
    I: IntoIterator<Item = T>,
{
    NanPrimitives::<T>::sum(&ScalarBackend, data)
}

/// Mean of the non-NaN elements and their count
pub fn mean_count<T, I>(data: I) -> (T, usize)
where
    T: NanFloat,
    I: IntoIterator<Item = T>,
{
    NanPrimitives::<T>::mean_count(&ScalarBackend, data)
}

/// Mean of the non-NaN elements
pub fn mean<T, I>(data: I) -> T
where
    T: NanFloat,
    I: IntoIterator<Item = T>,
{
    NanPrimitives::<T>::mean(&ScalarBackend, data)
}

/// Largest non-NaN element
pub fn maximum<T, I>(data: I) -> T
where
    T: NanFloat,
    I: IntoIterator<Item = T>,
{
    NanPrimitives::<T>::maximum(&ScalarBackend, data)
}

/// Smallest non-NaN element
pub fn minimum<T, I>(data: I) -> T
where
    T: NanFloat,
    I: IntoIterator<Item = T>,
{
    NanPrimitives::<T>::minimum(&ScalarBackend, data)
}

/// `(minimum, maximum)` of the non-NaN elements
pub fn extrema<T, I>(data: I) -> (T, T)
where
    T: NanFloat,
    I: IntoIterator<Item = T>,
{
    NanPrimitives::<T>::extrema(&ScalarBackend, data)
}
