//! NaN-skipping reduction primitives
//!
//! Every fold here walks its input once, left to right, and drops NaN
//! elements without ever comparing against them.

use crate::math;
use crate::numeric::NanFloat;
use log::warn;
use std::cmp::Ordering;

/// Unified trait for NaN-aware reductions with pluggable accumulation
///
/// Backends only differ in how they add numbers together
/// ([`sum_counted`](NanPrimitives::sum_counted)); every other operation is
/// defined in terms of it, so overriding that one method changes `sum`,
/// `mean`, `var` and `std` consistently.
///
/// Inputs are any `IntoIterator`, not just slices. Two-pass operations
/// (`var`, `std`) clone the iterator to walk it a second time.
pub trait NanPrimitives<T: NanFloat = f64>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Whether `sum` logs a warning when nothing was left to add
    fn warns_on_all_nan(&self) -> bool {
        true
    }

    /// Sum and count of the non-NaN elements
    ///
    /// The fold is seeded with the first kept element, so a lone `-0.0`
    /// keeps its sign. With nothing kept the total is zero.
    fn sum_counted<I>(&self, data: I) -> (T, usize)
    where
        I: IntoIterator<Item = T>,
    {
        let mut kept = data.into_iter().filter(|x| !x.is_nan());
        match kept.next() {
            Some(first) => kept.fold((first, 1), |(total, count), x| (total + x, count + 1)),
            None => (T::zero(), 0),
        }
    }

    /// Sum of the non-NaN elements
    ///
    /// Returns NaN when the input is empty or entirely NaN. A warning is
    /// logged whenever the result is NaN, which also covers opposite
    /// infinities cancelling out. This is the only reduction that warns.
    fn sum<I>(&self, data: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        let (total, count) = self.sum_counted(data);
        let total = if count == 0 { T::nan() } else { total };
        if total.is_nan() && self.warns_on_all_nan() {
            let cause = if count == 0 {
                "all elements are NaN"
            } else {
                "opposite infinities cancel"
            };
            warn!(
                target: "nan_core::reduce",
                "sum over {} sequence: {}, result is NaN",
                T::NAME,
                cause
            );
        }
        total
    }

    /// Mean of the non-NaN elements together with how many there were
    ///
    /// An empty or all-NaN input gives `0 / 0`, i.e. NaN with a count of zero.
    fn mean_count<I>(&self, data: I) -> (T, usize)
    where
        I: IntoIterator<Item = T>,
    {
        let (total, count) = self.sum_counted(data);
        (total / T::from_count(count), count)
    }

    /// Mean of the non-NaN elements
    fn mean<I>(&self, data: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        self.mean_count(data).0
    }

    /// Largest non-NaN element, NaN if there is none
    fn maximum<I>(&self, data: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        data.into_iter().fold(T::nan(), |best, x| {
            if x.is_nan() {
                best
            } else if best.is_nan() || x > best {
                x
            } else {
                best
            }
        })
    }

    /// Smallest non-NaN element, NaN if there is none
    fn minimum<I>(&self, data: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        data.into_iter().fold(T::nan(), |best, x| {
            if x.is_nan() {
                best
            } else if best.is_nan() || x < best {
                x
            } else {
                best
            }
        })
    }

    /// `(minimum, maximum)` in a single pass
    fn extrema<I>(&self, data: I) -> (T, T)
    where
        I: IntoIterator<Item = T>,
    {
        data.into_iter()
            .filter(|x| !x.is_nan())
            .fold((T::nan(), T::nan()), |(lo, hi), x| {
                let lo = if lo.is_nan() || x < lo { x } else { lo };
                let hi = if hi.is_nan() || x > hi { x } else { hi };
                (lo, hi)
            })
    }

    /// Unbiased sample variance of the non-NaN elements
    ///
    /// Two passes: the mean first, then the squared deviations divided by
    /// `count - 1`. A NaN mean short-circuits the second pass. A single
    /// non-NaN element divides zero by zero and yields NaN.
    fn var<I>(&self, data: I) -> T
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Clone,
    {
        let values = data.into_iter();
        let (mean, count) = self.mean_count(values.clone());
        if mean.is_nan() {
            return mean;
        }

        let squares = values
            .filter(|x| !x.is_nan())
            .fold(T::zero(), |acc, x| {
                let diff = x - mean;
                acc + diff * diff
            });
        squares / T::from_count(count - 1)
    }

    /// Sample standard deviation of the non-NaN elements
    fn std<I>(&self, data: I) -> T
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Clone,
    {
        math::sqrt(self.var(data))
    }

    /// Median of the non-NaN elements, NaN if there is none
    ///
    /// Works on a private filtered copy; the input is never reordered.
    fn median<I>(&self, data: I) -> T
    where
        I: IntoIterator<Item = T>,
    {
        let mut kept: Vec<T> = data.into_iter().filter(|x| !x.is_nan()).collect();
        if kept.is_empty() {
            return T::nan();
        }

        // No NaN remains, so partial_cmp always succeeds.
        kept.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let n = kept.len();
        let mid = n / 2;
        if n % 2 == 1 {
            kept[mid]
        } else {
            (kept[mid - 1] + kept[mid]) / (T::one() + T::one())
        }
    }
}
