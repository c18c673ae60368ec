//! First-improvement resampling of a single cell.

use rand::Rng;

use crate::candidate::CandidateGenerator;
use crate::config::SearchConfig;
use crate::distance::DistanceEvaluator;
use crate::grid::Grid;
use crate::observer::SearchObserver;

/// Outcome of one [`CellImprover::improve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Improvement {
    /// Whether the cell now holds a new value.
    pub updated: bool,
    /// Distance after the call; never above the distance passed in.
    pub distance: u64,
}

/// Tries to lower the distance by redrawing one cell.
#[derive(Debug, Clone, Copy)]
pub struct CellImprover {
    generator: CandidateGenerator,
    evaluator: DistanceEvaluator,
    iterations: usize,
}

impl CellImprover {
    pub fn new(
        generator: CandidateGenerator,
        evaluator: DistanceEvaluator,
        iterations: usize,
    ) -> Self {
        Self {
            generator,
            evaluator,
            iterations,
        }
    }

    /// # Panics
    ///
    /// Panics on an empty value range; run [`SearchConfig::validate`] first.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(
            CandidateGenerator::from_config(config),
            DistanceEvaluator::new(config.power),
            config.improve_iterations,
        )
    }

    pub fn evaluator(&self) -> &DistanceEvaluator {
        &self.evaluator
    }

    pub fn generator(&self) -> &CandidateGenerator {
        &self.generator
    }

    /// Draws up to `iterations` replacements for `(row, col)` and keeps the
    /// first one whose distance is strictly below `current`. If none is, the
    /// original value is put back.
    pub fn improve<R, O>(
        &self,
        grid: &mut Grid,
        row: usize,
        col: usize,
        current: u64,
        rng: &mut R,
        observer: &mut O,
    ) -> Improvement
    where
        R: Rng + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let original = grid.get(row, col);

        for _ in 0..self.iterations {
            let candidate = self.generator.next_for_cell(grid, row, col, rng);
            grid.set(row, col, candidate);
            let distance = self.evaluator.distance(grid);
            if distance < current {
                observer.on_update(grid, distance);
                return Improvement {
                    updated: true,
                    distance,
                };
            }
        }

        grid.set(row, col, original);
        Improvement {
            updated: false,
            distance: current,
        }
    }
}
