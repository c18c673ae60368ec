//! Candidate values for grid cells.

use rand::Rng;

use crate::config::SearchConfig;
use crate::grid::Grid;

/// Draws cell values uniformly from `[lower, upper)`.
///
/// When duplicates are disallowed, a drawn value that already occurs
/// elsewhere in the grid is thrown away and redrawn. Rejected draws consume
/// the random stream like accepted ones.
///
/// # Hazard
///
/// If the range holds fewer distinct values than the grid needs, the redraw
/// loop never ends. This is a configuration error and is not detected here;
/// see [`SearchConfig::unique_range_sufficient`].
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator {
    lower: i64,
    upper: i64,
    allow_duplicates: bool,
}

impl CandidateGenerator {
    /// # Panics
    ///
    /// Panics if `lower >= upper`.
    pub fn new(lower: i64, upper: i64, allow_duplicates: bool) -> Self {
        assert!(lower < upper, "empty value range");
        Self {
            lower,
            upper,
            allow_duplicates,
        }
    }

    /// # Panics
    ///
    /// Panics if `config.lower_bound >= config.upper_bound`; run
    /// [`SearchConfig::validate`] first.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(
            config.lower_bound,
            config.upper_bound,
            config.allow_duplicates,
        )
    }

    /// Draws a value for the next cell of a fill; `filled` holds the cells
    /// drawn so far in this fill.
    pub fn next_for_fill<R: Rng + ?Sized>(&self, filled: &[i64], rng: &mut R) -> i64 {
        self.draw(rng, |v| filled.contains(&v))
    }

    /// Draws a fresh `size * size` grid in row-major order.
    pub fn fill<R: Rng + ?Sized>(&self, size: usize, rng: &mut R) -> Grid {
        let mut cells = Vec::with_capacity(size * size);
        for _ in 0..size * size {
            let value = self.next_for_fill(&cells, rng);
            cells.push(value);
        }
        Grid::from_row_major(size, cells)
    }

    /// Draws a replacement for cell `(row, col)`, unique against every other
    /// cell.
    pub fn next_for_cell<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        row: usize,
        col: usize,
        rng: &mut R,
    ) -> i64 {
        self.draw(rng, |v| grid.contains_except(v, row, col))
    }

    /// Draws until `taken` rejects nothing (or duplicates are allowed).
    pub fn draw<R, F>(&self, rng: &mut R, taken: F) -> i64
    where
        R: Rng + ?Sized,
        F: Fn(i64) -> bool,
    {
        loop {
            let value = rng.random_range(self.lower..self.upper);
            if self.allow_duplicates || !taken(value) {
                return value;
            }
        }
    }
}
