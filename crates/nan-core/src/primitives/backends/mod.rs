//! Backend implementations
//!
//! Concrete backend types with compile-time dispatch. Backends only override
//! how non-NaN elements are accumulated; filtering and ordering live in the
//! trait defaults.

pub mod compensated;
pub mod scalar;

// Re-export the main backend types
pub use compensated::CompensatedBackend;
pub use scalar::ScalarBackend;
