//! Restart loop.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::Rng;

use super::rounds::RoundScheduler;
use crate::candidate::CandidateGenerator;
use crate::config::{ConfigError, SearchConfig};
use crate::grid::Grid;
use crate::observer::{NoopObserver, SearchObserver};
use crate::random::create_rng;

/// Result of a search.
///
/// Not finding a square is an ordinary outcome: check [`found`](Self::found).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// Whether a magic square was found.
    pub found: bool,

    /// Grid of the last attempt; the solution when `found` is true.
    pub grid: Grid,

    /// Distance of `grid`.
    pub distance: u64,

    /// Attempts performed, at most `max_restarts`.
    pub attempts: usize,

    /// Sweeps over all attempts.
    pub sweeps: usize,

    /// Cell updates over all attempts.
    pub updates: usize,

    /// Wall-clock time of the search.
    pub elapsed: Duration,

    /// Final distance of each attempt, in order.
    pub distance_history: Vec<u64>,
}

impl SolveResult {
    /// Attempts beyond the first when solved, all attempts otherwise.
    ///
    /// A square found on the first fill reports zero restarts.
    pub fn restarts(&self) -> usize {
        if self.found {
            self.attempts - 1
        } else {
            self.attempts
        }
    }
}

/// Executes the magic square search.
pub struct MagicRunner;

impl MagicRunner {
    /// Runs the search with a generator seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use magic_search::{MagicRunner, SearchConfig};
    ///
    /// let config = SearchConfig::default()
    ///     .with_size(3)
    ///     .with_bounds(1, 4)
    ///     .with_allow_duplicates(true)
    ///     .with_seed(42)
    ///     .with_max_restarts(10_000);
    /// let result = MagicRunner::run(&config).unwrap();
    /// assert!(result.found);
    /// assert_eq!(result.distance, 0);
    /// ```
    pub fn run(config: &SearchConfig) -> Result<SolveResult, ConfigError> {
        Self::run_with_observer(config, &mut NoopObserver)
    }

    /// Runs the search, reporting progress to `observer`.
    pub fn run_with_observer<O>(
        config: &SearchConfig,
        observer: &mut O,
    ) -> Result<SolveResult, ConfigError>
    where
        O: SearchObserver + ?Sized,
    {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(config, &mut rng, observer)
    }

    /// Runs the search on a caller-supplied generator. `config.seed` is only
    /// reported, not used.
    pub fn run_with_rng<R, O>(
        config: &SearchConfig,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<SolveResult, ConfigError>
    where
        R: Rng + ?Sized,
        O: SearchObserver + ?Sized,
    {
        config.validate()?;
        if !config.unique_range_sufficient() {
            warn!(
                "range [{}, {}) cannot fill {} distinct cells; drawing will not terminate",
                config.lower_bound,
                config.upper_bound,
                config.cell_count()
            );
        }
        info!(
            "searching {0}x{0} square, power {1}, seed {2}",
            config.size, config.power, config.seed
        );

        let start = Instant::now();
        let generator = CandidateGenerator::from_config(config);
        let scheduler = RoundScheduler::from_config(config);
        let evaluator = *scheduler.improver().evaluator();

        observer.on_start(config);

        let mut grid = Grid::new(config.size);
        let mut distance = u64::MAX;
        let mut attempts = 0;
        let mut sweeps = 0;
        let mut updates = 0;
        let mut distance_history = Vec::new();

        while attempts < config.max_restarts {
            attempts += 1;

            grid = generator.fill(config.size, rng);
            let initial = evaluator.distance(&grid);
            observer.on_update(&grid, initial);

            let stats = scheduler.run(&mut grid, initial, rng, observer);
            distance = stats.distance;
            sweeps += stats.sweeps;
            updates += stats.updates;
            distance_history.push(distance);

            debug!(
                "attempt {attempts}: distance {initial} -> {distance} in {} sweeps",
                stats.sweeps
            );
            observer.on_attempt(attempts, distance);

            if distance == 0 {
                observer.on_solved(&grid, distance);
                break;
            }
        }

        let result = SolveResult {
            found: distance == 0,
            grid,
            distance,
            attempts,
            sweeps,
            updates,
            elapsed: start.elapsed(),
            distance_history,
        };

        info!(
            "{} after {} attempts in {:.3}s",
            if result.found { "solved" } else { "gave up" },
            result.attempts,
            result.elapsed.as_secs_f64()
        );
        observer.on_finish(&result);

        Ok(result)
    }
}
