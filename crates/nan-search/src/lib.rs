//! Keyed extremum search with NaN and missing-value ordering
//!
//! `findmin`/`findmax` return the best value of a keyed domain together with
//! its key; `argmin`/`argmax` return only the key (or, for the `_by`
//! variants, the winning element itself).
//!
//! # Ordering
//!
//! - A NaN arriving after a number never displaces it, in either direction.
//!   A domain of nothing but NaN yields its first NaN.
//! - A NaN at the head of the domain is kept by `findmin`/`findmax`, whose
//!   ordinary comparison can never replace it, and skipped by
//!   `argmin`/`argmax`, which rank NaN past every number.
//! - A missing value (`None`) wins in the direction being searched: it ranks
//!   below everything for a minimum and above everything for a maximum.
//! - Exact ties resolve to the element met first.
//!
//! An empty domain is a contract violation and returns
//! [`Error::EmptyInput`](nan_core::Error::EmptyInput).
//!
//! # Example
//!
//! ```rust
//! use nan_search::{findmin, findmax};
//!
//! let readings = [Some(3.5), Some(f64::NAN), Some(1.25), Some(9.0)];
//! let keyed = || readings.iter().copied().enumerate();
//!
//! assert_eq!(findmin(keyed()).unwrap(), (Some(1.25), 2));
//! assert_eq!(findmax(keyed()).unwrap(), (Some(9.0), 3));
//! assert!(findmin(std::iter::empty::<(usize, f64)>()).is_err());
//! ```

pub mod score;
pub mod search;

pub use score::{Direction, Score, Scored};
pub use search::{
    argmax, argmax_by, argmin, argmin_by, findmax, findmax_by, findmin, findmin_by, search,
};

// Re-export from nan-core
pub use nan_core::{Error, Result};
