//! Randomized hill climbing with restarts.
//!
//! # Algorithm
//!
//! 1. Fill the grid with fresh candidates, row by row
//! 2. Sweep every cell in row-major order; for each cell draw up to
//!    `improve_iterations` replacements and keep the first one that lowers
//!    the distance
//! 3. Repeat sweeps until the distance is zero, a sweep updates fewer than
//!    `min_updates` cells, or `improve_rounds` sweeps have run
//! 4. If the distance is still nonzero, restart from step 1, at most
//!    `max_restarts` times
//!
//! # Reproducibility
//!
//! All randomness comes from the generator passed in, consumed in a fixed
//! order: the fill in row-major order, then each cell visit and each of its
//! attempts in sweep order. The same seed and configuration always give the
//! same trajectory.

mod improve;
mod rounds;
mod runner;

pub use improve::{CellImprover, Improvement};
pub use rounds::{RoundScheduler, RoundStats};
pub use runner::{MagicRunner, SolveResult};
