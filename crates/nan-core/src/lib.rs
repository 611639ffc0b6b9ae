//! NaN-aware numeric primitives
//!
//! Scalar ordering and sequence reductions that treat NaN as "absent" rather
//! than letting it poison the result.
//!
//! # Overview
//!
//! - **Scalar ordering** ([`ordering`]): IEEE-754-2008 `min`/`max` of two
//!   values; a lone NaN operand is ignored.
//! - **Linear reductions** ([`reduce`]): `sum`, `mean`, `mean_count`,
//!   `maximum`, `minimum`, `extrema` as single left-to-right folds.
//! - **Derived statistics** ([`stats`]): two-pass `var`/`std`, and `median`.
//! - **Backends** ([`primitives`]): the reductions as a trait with a
//!   reference scalar backend and a compensated-summation backend, selectable
//!   at runtime through [`ReductionConfig`].
//! - **Scalar math** ([`math`]): native transcendental functions returning
//!   NaN on domain errors.
//!
//! Degenerate input (empty or all-NaN) never panics. The linear and derived
//! reductions return NaN; `sum` additionally logs a warning through the `log`
//! facade.
//!
//! # Example
//!
//! ```rust
//! use nan_core::{reduce, stats};
//!
//! let data = [1.0, 2.0, f64::NAN];
//! assert_eq!(reduce::sum(data), 3.0);
//! assert_eq!(reduce::mean(data), 1.5);
//! assert_eq!(stats::var(data), 0.5);
//! assert_eq!(stats::median(data), 1.5);
//! ```

pub mod config;
pub mod error;
pub mod math;
pub mod numeric;
pub mod ordering;
pub mod primitives;
pub mod reduce;
pub mod stats;

// Re-export core types
pub use error::{Error, Result};

pub use config::{Accumulation, ReductionConfig, Reducer};
pub use numeric::NanFloat;
pub use ordering::NanOrd;
pub use primitives::{
    compensated_backend, scalar_backend, CompensatedBackend, NanPrimitives, ScalarBackend,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Accumulation,
        NanFloat,
        NanOrd,
        NanPrimitives,
        ReductionConfig,
        Reducer,
        Result,
        // Backend types
        CompensatedBackend,
        ScalarBackend,
    };

    pub use crate::error::Error;
}
