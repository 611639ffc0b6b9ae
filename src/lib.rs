//! NaN-aware numeric primitives
//!
//! Reductions and searches that treat NaN as "absent" instead of letting it
//! poison the result.
//!
//! This crate re-exports the workspace members:
//!
//! - [`nan_core`]: scalar `min`/`max`, `sum`, `mean`, `maximum`,
//!   `minimum`, `extrema`, `var`, `std`, `median`, reduction backends and
//!   NaN-returning scalar math
//! - [`nan_search`]: `findmin`, `findmax`, `argmin`, `argmax` over
//!   keyed domains, with a missing-value marker
//!
//! # Example
//!
//! ```rust
//! use nan_stats::prelude::*;
//! use nan_stats::{reduce, stats};
//!
//! let data = [1.0, 2.0, f64::NAN];
//! assert_eq!(reduce::sum(data), 3.0);
//! assert_eq!(reduce::extrema(data), (1.0, 2.0));
//! assert_eq!(stats::median(data), 1.5);
//!
//! let (value, index) = findmin(data.iter().copied().enumerate()).unwrap();
//! assert_eq!((value, index), (1.0, 0));
//! ```

pub use nan_core;
pub use nan_search;

pub use nan_core::{math, ordering, reduce, stats};
pub use nan_core::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use nan_core::prelude::*;
    pub use nan_search::{
        argmax, argmax_by, argmin, argmin_by, findmax, findmax_by, findmin, findmin_by, Direction,
        Score, Scored,
    };
}
