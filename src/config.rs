//! Search configuration.
//!
//! [`SearchConfig`] holds every parameter of a run. It is immutable once
//! handed to the runner.

use thiserror::Error;

/// Errors reported by [`SearchConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("size must be at least 1")]
    ZeroSize,

    #[error("power must be at least 1")]
    ZeroPower,

    #[error("lower_bound ({lower}) must be less than upper_bound ({upper})")]
    EmptyRange { lower: i64, upper: i64 },

    #[error("max_restarts must be at least 1")]
    ZeroRestarts,
}

/// Configuration for the magic square search.
///
/// # Examples
///
/// ```
/// use magic_search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_size(4)
///     .with_bounds(1, 17)
///     .with_seed(7)
///     .with_max_restarts(50);
/// assert_eq!(config.size, 4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Grid dimension; the grid is `size * size`.
    pub size: usize,

    /// 1 for classic squares, 2 for bimagic, 3 for trimagic, and so on.
    ///
    /// For `power > 1` each cell contributes `v + v^power` to its sums.
    pub power: u32,

    /// Smallest value a cell may hold (inclusive).
    pub lower_bound: i64,

    /// Largest value a cell may hold (exclusive).
    pub upper_bound: i64,

    /// Whether a value may appear in more than one cell.
    ///
    /// When `false`, `upper_bound - lower_bound` must be comfortably larger
    /// than `size * size`, otherwise drawing a fresh value never terminates.
    pub allow_duplicates: bool,

    /// Seed for the random stream.
    pub seed: u64,

    /// Resample attempts per cell visit.
    pub improve_iterations: usize,

    /// Maximum number of full sweeps per restart attempt.
    pub improve_rounds: usize,

    /// A sweep updating fewer cells than this ends the attempt.
    pub min_updates: usize,

    /// Maximum number of restart attempts.
    pub max_restarts: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let size = 10;
        Self {
            size,
            power: 1,
            lower_bound: 1,
            upper_bound: (size * size * 4) as i64,
            allow_duplicates: false,
            seed: 3493,
            improve_iterations: 10,
            improve_rounds: 1000,
            min_updates: 1,
            max_restarts: 1000,
        }
    }
}

impl SearchConfig {
    /// Sets the grid dimension. Bounds are left untouched.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    /// Sets the half-open value range `[lower, upper)`.
    pub fn with_bounds(mut self, lower: i64, upper: i64) -> Self {
        self.lower_bound = lower;
        self.upper_bound = upper;
        self
    }

    pub fn with_allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_improve_iterations(mut self, n: usize) -> Self {
        self.improve_iterations = n;
        self
    }

    pub fn with_improve_rounds(mut self, n: usize) -> Self {
        self.improve_rounds = n;
        self
    }

    pub fn with_min_updates(mut self, n: usize) -> Self {
        self.min_updates = n;
        self
    }

    pub fn with_max_restarts(mut self, n: usize) -> Self {
        self.max_restarts = n;
        self
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Whether the value range can hold every cell without repeats.
    ///
    /// Always `true` when duplicates are allowed. A `false` here is not
    /// rejected by [`validate`](Self::validate): the search will simply
    /// never finish drawing.
    pub fn unique_range_sufficient(&self) -> bool {
        if self.allow_duplicates {
            return true;
        }
        let span = self.upper_bound.saturating_sub(self.lower_bound);
        span > 0 && (span as u128) >= self.cell_count() as u128
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.power == 0 {
            return Err(ConfigError::ZeroPower);
        }
        if self.lower_bound >= self.upper_bound {
            return Err(ConfigError::EmptyRange {
                lower: self.lower_bound,
                upper: self.upper_bound,
            });
        }
        if self.max_restarts == 0 {
            return Err(ConfigError::ZeroRestarts);
        }
        Ok(())
    }
}
