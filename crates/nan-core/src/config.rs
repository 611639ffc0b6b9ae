//! Configuration types for reductions

use crate::error::{Error, Result};
use crate::numeric::NanFloat;
use crate::primitives::{CompensatedBackend, NanPrimitives, ScalarBackend};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How non-NaN elements are added together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Accumulation {
    /// Plain addition in insertion order (reference, reproducible)
    Sequential,

    /// Neumaier compensated summation
    Compensated,
}

impl Accumulation {
    const NAMES: [&'static str; 2] = ["sequential", "compensated"];

    /// Get the name of this accumulation mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Compensated => "compensated",
        }
    }
}

impl Default for Accumulation {
    fn default() -> Self {
        Self::Sequential
    }
}

impl fmt::Display for Accumulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Accumulation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "compensated" | "kahan" => Ok(Self::Compensated),
            other => Err(Error::unknown_variant("accumulation", other, &Self::NAMES)),
        }
    }
}

/// Settings shared by every reduction a [`Reducer`] performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReductionConfig {
    pub accumulation: Accumulation,

    /// Log a warning when `sum` comes out NaN (no non-NaN element, or
    /// opposite infinities). Never changes the returned value.
    pub warn_on_all_nan: bool,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            accumulation: Accumulation::default(),
            warn_on_all_nan: true,
        }
    }
}

impl ReductionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accumulation(mut self, accumulation: Accumulation) -> Self {
        self.accumulation = accumulation;
        self
    }

    pub fn with_all_nan_warning(mut self, enabled: bool) -> Self {
        self.warn_on_all_nan = enabled;
        self
    }

    /// Build a reducer that applies these settings
    pub fn reducer(self) -> Reducer {
        Reducer { config: self }
    }
}

/// Reduction backend selected at runtime from a [`ReductionConfig`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Reducer {
    config: ReductionConfig,
}

impl Reducer {
    pub fn new(config: ReductionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReductionConfig {
        &self.config
    }
}

impl<T: NanFloat> NanPrimitives<T> for Reducer {
    fn backend_name(&self) -> &'static str {
        match self.config.accumulation {
            Accumulation::Sequential => NanPrimitives::<T>::backend_name(&ScalarBackend),
            Accumulation::Compensated => NanPrimitives::<T>::backend_name(&CompensatedBackend),
        }
    }

    fn warns_on_all_nan(&self) -> bool {
        self.config.warn_on_all_nan
    }

    fn sum_counted<I>(&self, data: I) -> (T, usize)
    where
        I: IntoIterator<Item = T>,
    {
        match self.config.accumulation {
            Accumulation::Sequential => NanPrimitives::<T>::sum_counted(&ScalarBackend, data),
            Accumulation::Compensated => NanPrimitives::<T>::sum_counted(&CompensatedBackend, data),
        }
    }
}
