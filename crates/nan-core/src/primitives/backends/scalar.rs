//! Scalar backend implementation
//!
//! Reference semantics: plain floating-point addition in insertion order, so
//! results are reproducible bit for bit.

use crate::numeric::NanFloat;
use crate::primitives::NanPrimitives;

/// Scalar backend - sequential left-to-right accumulation
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<T: NanFloat> NanPrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // All operations use the default implementations from the trait
}
