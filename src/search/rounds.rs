//! Sweep scheduling within one restart attempt.

use log::trace;
use rand::Rng;

use super::improve::CellImprover;
use crate::config::SearchConfig;
use crate::grid::Grid;
use crate::observer::SearchObserver;

/// Progress made by [`RoundScheduler::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundStats {
    /// Distance when the attempt stopped.
    pub distance: u64,
    /// Sweeps performed, including one cut short by reaching zero.
    pub sweeps: usize,
    /// Cell updates over all sweeps.
    pub updates: usize,
}

/// Runs full sweeps of [`CellImprover`] over the grid.
///
/// Stops when the distance reaches zero, when a sweep updates fewer than
/// `min_updates` cells, or after `improve_rounds` sweeps. The sweep budget
/// alone bounds the work: with `min_updates == 0` the stagnation check never
/// fires and every attempt runs the full budget unless it solves.
#[derive(Debug, Clone, Copy)]
pub struct RoundScheduler {
    improver: CellImprover,
    improve_rounds: usize,
    min_updates: usize,
}

impl RoundScheduler {
    pub fn new(improver: CellImprover, improve_rounds: usize, min_updates: usize) -> Self {
        Self {
            improver,
            improve_rounds,
            min_updates,
        }
    }

    /// # Panics
    ///
    /// Panics on an empty value range; run [`SearchConfig::validate`] first.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(
            CellImprover::from_config(config),
            config.improve_rounds,
            config.min_updates,
        )
    }

    pub fn improver(&self) -> &CellImprover {
        &self.improver
    }

    /// Runs sweeps starting from `distance`, the distance of `grid` as given.
    pub fn run<R, O>(
        &self,
        grid: &mut Grid,
        distance: u64,
        rng: &mut R,
        observer: &mut O,
    ) -> RoundStats
    where
        R: Rng + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let mut stats = RoundStats {
            distance,
            ..RoundStats::default()
        };

        while stats.distance != 0 && stats.sweeps < self.improve_rounds {
            let (updated, distance) = self.sweep(grid, stats.distance, rng, observer);
            stats.sweeps += 1;
            stats.updates += updated;
            stats.distance = distance;
            trace!(
                "sweep {}: {} updates, distance {}",
                stats.sweeps,
                updated,
                distance
            );

            if updated < self.min_updates {
                break;
            }
        }

        stats
    }

    /// One row-major pass over every cell. Returns the number of updated
    /// cells and the resulting distance; stops early once the distance is zero.
    pub fn sweep<R, O>(
        &self,
        grid: &mut Grid,
        mut distance: u64,
        rng: &mut R,
        observer: &mut O,
    ) -> (usize, u64)
    where
        R: Rng + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let n = grid.size();
        let mut updated = 0;

        for row in 0..n {
            for col in 0..n {
                let step = self.improver.improve(grid, row, col, distance, rng, observer);
                if step.updated {
                    updated += 1;
                    distance = step.distance;
                    if distance == 0 {
                        return (updated, distance);
                    }
                }
            }
        }

        (updated, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::CandidateGenerator;
    use crate::observer::{HistoryObserver, NoopObserver};
    use crate::random::create_rng;

    fn filled(config: &SearchConfig, seed: u64) -> (Grid, u64, crate::random::SearchRng) {
        let mut rng = create_rng(seed);
        let grid = CandidateGenerator::from_config(config).fill(config.size, &mut rng);
        let distance = RoundScheduler::from_config(config)
            .improver()
            .evaluator()
            .distance(&grid);
        (grid, distance, rng)
    }

    #[test]
    #[should_panic(expected = "empty value range")]
    fn test_from_config_rejects_unvalidated_range() {
        let config = SearchConfig::default().with_bounds(10, 1);
        RoundScheduler::from_config(&config);
    }

    #[test]
    fn test_zero_distance_runs_no_sweeps() {
        let config = SearchConfig::default().with_size(3);
        let mut grid =
            Grid::from_rows(vec![vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]]).unwrap();
        let mut rng = create_rng(1);
        let scheduler = RoundScheduler::from_config(&config);
        let stats = scheduler.run(&mut grid, 0, &mut rng, &mut NoopObserver);
        assert_eq!(stats, RoundStats::default());
    }

    #[test]
    fn test_zero_rounds_runs_no_sweeps() {
        let config = SearchConfig::default().with_size(4).with_improve_rounds(0);
        let (mut grid, distance, mut rng) = filled(&config, 8);
        let before = grid.clone();
        let scheduler = RoundScheduler::from_config(&config);
        let stats = scheduler.run(&mut grid, distance, &mut rng, &mut NoopObserver);
        assert_eq!(stats.sweeps, 0);
        assert_eq!(stats.distance, distance);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_rounds_bound_sweeps_without_stagnation_guard() {
        // distinct 2x2 squares are never magic, so only the budget stops this
        let config = SearchConfig::default()
            .with_size(2)
            .with_bounds(1, 50)
            .with_improve_rounds(7)
            .with_min_updates(0);
        let (mut grid, distance, mut rng) = filled(&config, 21);
        let scheduler = RoundScheduler::from_config(&config);
        let stats = scheduler.run(&mut grid, distance, &mut rng, &mut NoopObserver);
        assert_eq!(stats.sweeps, 7);
        assert!(stats.distance > 0);
    }

    #[test]
    fn test_stagnation_stops_early() {
        let config = SearchConfig::default()
            .with_size(2)
            .with_bounds(1, 50)
            .with_improve_rounds(10_000)
            .with_min_updates(1);
        let (mut grid, distance, mut rng) = filled(&config, 4);
        let scheduler = RoundScheduler::from_config(&config);
        let stats = scheduler.run(&mut grid, distance, &mut rng, &mut NoopObserver);
        // every productive sweep lowers the distance by at least one
        assert!(stats.sweeps as u64 <= distance + 1);
        assert!(stats.sweeps < 10_000);
        assert!(stats.distance <= distance);
    }

    #[test]
    fn test_distance_strictly_decreases_per_update() {
        let config = SearchConfig::default()
            .with_size(5)
            .with_bounds(1, 101)
            .with_improve_rounds(50);
        let (mut grid, distance, mut rng) = filled(&config, 99);
        let mut history = HistoryObserver::default();
        let scheduler = RoundScheduler::from_config(&config);
        let stats = scheduler.run(&mut grid, distance, &mut rng, &mut history);

        let updates: Vec<u64> = history.attempts.concat();
        assert_eq!(updates.len(), stats.updates);
        let mut previous = distance;
        for d in updates {
            assert!(d < previous, "distance went from {previous} to {d}");
            previous = d;
        }
        assert_eq!(previous, stats.distance);
        assert_eq!(stats.distance, scheduler.improver().evaluator().distance(&grid));
    }
}
