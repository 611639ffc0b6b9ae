//! Floating-point trait for NaN-aware computing
//!
//! Every reduction in this crate is generic over [`NanFloat`], which bundles
//! the `num-traits` float interface with the few conversions the folds need.
//! Only types with a NaN bit pattern implement it; integer types take part in
//! scalar ordering through [`crate::ordering::NanOrd`] instead.

use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Base trait for floating-point types that reductions accept
pub trait NanFloat: Float + FromPrimitive + Debug + Default + Send + Sync + 'static {
    /// Short type name used in diagnostics
    const NAME: &'static str;

    /// Convert an element count to this type (mean and variance divisors)
    fn from_count(n: usize) -> Self {
        <Self as FromPrimitive>::from_usize(n).unwrap_or_else(Self::infinity)
    }

    /// Widen to f64 for logging
    fn to_f64_lossy(self) -> f64;
}

impl NanFloat for f64 {
    const NAME: &'static str = "f64";

    fn to_f64_lossy(self) -> f64 {
        self
    }
}

impl NanFloat for f32 {
    const NAME: &'static str = "f32";

    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}
