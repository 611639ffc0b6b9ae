//! Compensated summation backend
//!
//! Uses Neumaier's variant of Kahan summation: a running correction term
//! recovers the low-order bits lost by each addition. Elements are still
//! visited in insertion order, but the rounded result can differ from the
//! scalar backend in the last few ulps. Opt in through
//! [`Accumulation::Compensated`](crate::config::Accumulation::Compensated).

use crate::numeric::NanFloat;
use crate::primitives::NanPrimitives;

/// Backend with O(ε) summation error independent of sequence length
#[derive(Clone, Copy, Debug, Default)]
pub struct CompensatedBackend;

impl CompensatedBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<T: NanFloat> NanPrimitives<T> for CompensatedBackend {
    fn backend_name(&self) -> &'static str {
        "compensated"
    }

    fn sum_counted<I>(&self, data: I) -> (T, usize)
    where
        I: IntoIterator<Item = T>,
    {
        let mut kept = data.into_iter().filter(|x| !x.is_nan());
        let Some(mut total) = kept.next() else {
            return (T::zero(), 0);
        };
        let mut correction = T::zero();
        let mut count = 1usize;

        for x in kept {
            let t = total + x;
            if total.abs() >= x.abs() {
                correction = correction + ((total - t) + x);
            } else {
                correction = correction + ((x - t) + total);
            }
            total = t;
            count += 1;
        }

        // Once an infinity is involved the correction term is NaN; the plain
        // total already carries the right answer. A zero correction is
        // skipped so that `-0.0` survives.
        if total.is_finite() && correction != T::zero() {
            (total + correction, count)
        } else {
            (total, count)
        }
    }
}
