//! Randomized local search for magic squares.
//!
//! Builds an N×N grid whose rows, columns and both main diagonals share the
//! same sum, optionally under a power weighting for bimagic and trimagic
//! variants. The search is first-improvement hill climbing over single
//! cells, organised in sweeps, with full restarts to escape local optima.
//!
//! - [`config`]: run parameters and validation
//! - [`grid`]: the N×N integer matrix and its printed form
//! - [`random`]: the seeded generator every search step draws from
//! - [`candidate`]: value drawing with optional uniqueness
//! - [`distance`]: the fitness measure, zero exactly for magic grids
//! - [`search`]: cell improvement, sweep scheduling and the restart loop
//! - [`observer`]: progress hooks and the text trace
//!
//! # Example
//!
//! ```
//! use magic_search::{MagicRunner, SearchConfig};
//!
//! let config = SearchConfig::default()
//!     .with_size(3)
//!     .with_bounds(1, 6)
//!     .with_allow_duplicates(true)
//!     .with_seed(1)
//!     .with_max_restarts(10_000);
//!
//! let result = MagicRunner::run(&config).unwrap();
//! if result.found {
//!     println!("{}", result.grid);
//! }
//! ```

pub mod candidate;
pub mod config;
pub mod distance;
pub mod grid;
pub mod observer;
pub mod random;
pub mod search;

pub use config::{ConfigError, SearchConfig};
pub use distance::{DistanceEvaluator, Evaluation};
pub use grid::{Grid, GridError};
pub use observer::{NoopObserver, SearchObserver, TraceWriter};
pub use search::{MagicRunner, SolveResult};
