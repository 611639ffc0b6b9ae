//! NaN-aware reduction primitives with compile-time backend dispatch
//!
//! # Architecture
//!
//! - Single `NanPrimitives<T>` trait holding every reduction as a default method
//! - Concrete backend types: `ScalarBackend`, `CompensatedBackend`
//! - Backends differ only in `sum_counted`; everything else is shared
//!
//! # Usage
//!
//! ```rust
//! use nan_core::primitives::{CompensatedBackend, NanPrimitives, ScalarBackend};
//!
//! let data = [1.0, 2.0, f64::NAN];
//! assert_eq!(ScalarBackend.sum(data), 3.0);
//! assert_eq!(CompensatedBackend.mean(data), 1.5);
//! ```

pub mod backends;
pub mod traits;

pub use backends::{CompensatedBackend, ScalarBackend};
pub use traits::NanPrimitives;

/// Create a scalar backend (reference semantics)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Create a compensated-summation backend
pub fn compensated_backend() -> CompensatedBackend {
    CompensatedBackend::new()
}
