//! Progress hooks.
//!
//! The search calls a [`SearchObserver`] at fixed points. Observers only see
//! shared references and have no way to steer the search, so a run behaves
//! identically with or without one attached.

use std::io::{self, Write};

use crate::config::SearchConfig;
use crate::grid::Grid;
use crate::search::SolveResult;

/// Receives search progress. Every method defaults to doing nothing.
pub trait SearchObserver {
    /// Called once before the first attempt.
    fn on_start(&mut self, _config: &SearchConfig) {}

    /// Called after the fill of each attempt and after every cell update
    /// that lowered the distance.
    fn on_update(&mut self, _grid: &Grid, _distance: u64) {}

    /// Called when an attempt ends, with its 1-based index and final distance.
    fn on_attempt(&mut self, _attempt: usize, _distance: u64) {}

    /// Called once when a magic square is found.
    fn on_solved(&mut self, _grid: &Grid, _distance: u64) {}

    /// Called once after the last attempt, whatever the outcome.
    fn on_finish(&mut self, _result: &SolveResult) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Writes the textual progress trace.
///
/// ```text
/// seed: 7
/// distance
/// 12
/// 0
/// {2, 7, 6},
/// {9, 5, 1},
/// {4, 3, 8}
/// distance: 0
/// restarts: 1, elapsed: 0.0013s
/// ```
///
/// `restarts` counts the attempts before the solving one, or all attempts
/// when none solved; see [`SolveResult::restarts`].
///
/// The first write error stops further output and is returned by
/// [`finish`](Self::finish).
#[derive(Debug)]
pub struct TraceWriter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flushes and returns the writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(args) {
            self.error = Some(err);
        }
    }
}

impl<W: Write> SearchObserver for TraceWriter<W> {
    fn on_start(&mut self, config: &SearchConfig) {
        self.emit(format_args!("seed: {}\ndistance\n", config.seed));
    }

    fn on_attempt(&mut self, _attempt: usize, distance: u64) {
        self.emit(format_args!("{distance}\n"));
    }

    fn on_solved(&mut self, grid: &Grid, distance: u64) {
        self.emit(format_args!("{grid}\ndistance: {distance}\n"));
    }

    fn on_finish(&mut self, result: &SolveResult) {
        self.emit(format_args!(
            "restarts: {}, elapsed: {}s\n",
            result.restarts(),
            result.elapsed.as_secs_f64()
        ));
    }
}

/// Records every distance passed to [`on_update`](SearchObserver::on_update),
/// one list per attempt.
#[derive(Debug, Default, Clone)]
pub struct HistoryObserver {
    pub attempts: Vec<Vec<u64>>,
    // set when an attempt ends; the next update opens a new list
    attempt_closed: bool,
}

impl SearchObserver for HistoryObserver {
    fn on_update(&mut self, _grid: &Grid, distance: u64) {
        match self.attempts.last_mut() {
            Some(current) if !self.attempt_closed => current.push(distance),
            _ => {
                self.attempts.push(vec![distance]);
                self.attempt_closed = false;
            }
        }
    }

    fn on_attempt(&mut self, _attempt: usize, _distance: u64) {
        self.attempt_closed = true;
    }
}
