//! Exhaustive (brute-force) search.
//!
//! # Algorithm
//!
//! City 0 is fixed as the origin, which removes rotations of the same cycle
//! without losing any distinct tour. The remaining n−1 cities run through all
//! (n−1)! orderings in lexicographic order. Each candidate's cyclic length is
//! compared with the incumbent; a strictly lower cost replaces it, so among
//! equal-cost tours the first one generated wins.
//!
//! Reflections (the same cycle traversed backwards) are still enumerated as
//! separate permutations, so a completed search always reports
//! `iterations == (n−1)!`.
//!
//! # Complexity
//!
//! O(n! · n) time, O(n) working space beside the optional trace. Practical up
//! to roughly n = 10–12.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::permutation::{factorial, next_permutation};
use super::trace::SearchTrace;
use crate::config::ExhaustiveConfig;
use crate::distance::DistanceMatrix;
use crate::evaluation::cycle_length;
use crate::models::{EarlyStop, ExhaustiveResult, SearchProgress, Tour};

/// Finds the minimum-cost tour by evaluating every tour from city 0.
///
/// With `record_trace`, the result carries a bounded [`SearchTrace`] using
/// the default [`ExhaustiveConfig`] limits. `early_stop` is checked after
/// each evaluated tour; when it returns `true` the search ends and the result
/// is marked incomplete.
///
/// # Examples
///
/// ```
/// use tsp_compare::distance::{build_distance_matrix, Metric};
/// use tsp_compare::exact::solve_exhaustive;
/// use tsp_compare::models::City;
///
/// let cities = vec![
///     City::new("a", (0.0, 0.0)),
///     City::new("b", (1.0, 1.0)),
///     City::new("c", (0.0, 1.0)),
///     City::new("d", (1.0, 0.0)),
/// ];
/// let dm = build_distance_matrix(&cities, Metric::Euclidean).unwrap();
///
/// let result = solve_exhaustive(&dm, false, None);
/// assert!((result.cost - 4.0).abs() < 1e-10);
/// assert_eq!(result.iterations, 6);
/// assert!(result.completed);
/// ```
pub fn solve_exhaustive(
    distances: &DistanceMatrix,
    record_trace: bool,
    early_stop: Option<EarlyStop<'_>>,
) -> ExhaustiveResult {
    let config = ExhaustiveConfig::default().with_record_trace(record_trace);
    solve_exhaustive_with(distances, &config, early_stop)
}

/// Like [`solve_exhaustive`], with explicit trace and logging settings.
pub fn solve_exhaustive_with(
    distances: &DistanceMatrix,
    config: &ExhaustiveConfig,
    early_stop: Option<EarlyStop<'_>>,
) -> ExhaustiveResult {
    let n = distances.size();
    let started = Instant::now();
    log_start(n);

    let mut trace = config
        .record_trace
        .then(|| SearchTrace::new(config.sample_every, config.sample_capacity));

    let search = SliceSearch {
        distances,
        fixed: 1,
        started,
        early_stop,
        cancel: None,
        progress_interval: config.progress_interval,
    };
    let outcome = search.run((0..n).collect(), trace.as_mut());

    let result = ExhaustiveResult {
        tour: Tour::from_order(outcome.best_tour),
        cost: outcome.best_cost,
        iterations: outcome.iterations,
        elapsed: started.elapsed(),
        completed: !outcome.stopped,
        trace,
    };
    log_finish(&result);
    result
}

pub(super) fn log_start(n: usize) {
    match factorial(n.saturating_sub(1)) {
        Some(total) => log::info!("exhaustive search over {n} cities: {total} tours"),
        None => log::warn!("exhaustive search over {n} cities: more than u64::MAX tours"),
    }
}

pub(super) fn log_finish(result: &ExhaustiveResult) {
    let per_tour_ms = if result.iterations > 0 {
        result.elapsed.as_secs_f64() * 1000.0 / result.iterations as f64
    } else {
        0.0
    };
    log::info!(
        "exhaustive search {}: cost {:.2} after {} tours in {:.4}s ({:.4} ms/tour)",
        if result.completed { "finished" } else { "stopped early" },
        result.cost,
        result.iterations,
        result.elapsed.as_secs_f64(),
        per_tour_ms,
    );
}

/// Lexicographic search over the permutations of `tour[fixed..]`.
pub(super) struct SliceSearch<'a> {
    pub distances: &'a DistanceMatrix,
    /// Leading positions that stay put.
    pub fixed: usize,
    pub started: Instant,
    pub early_stop: Option<EarlyStop<'a>>,
    /// Shared flag that ends every slice once one of them stops early.
    pub cancel: Option<&'a AtomicBool>,
    pub progress_interval: u64,
}

pub(super) struct SliceOutcome {
    pub best_tour: Vec<usize>,
    pub best_cost: f64,
    pub iterations: u64,
    pub stopped: bool,
}

impl SliceSearch<'_> {
    /// Evaluates `tour` and every lexicographic successor of its free suffix.
    pub fn run(&self, mut tour: Vec<usize>, mut trace: Option<&mut SearchTrace>) -> SliceOutcome {
        let mut best_cost = cycle_length(&tour, self.distances);
        let mut best_tour = tour.clone();
        let mut iterations = 1u64;
        let mut stopped = false;
        let fixed = self.fixed.min(tour.len());
        if let Some(t) = trace.as_deref_mut() {
            t.record(iterations, &tour, best_cost, true);
        }

        loop {
            if !next_permutation(&mut tour[fixed..]) {
                break;
            }
            if self.should_stop(iterations, best_cost) {
                stopped = true;
                break;
            }

            let cost = cycle_length(&tour, self.distances);
            iterations += 1;
            let improved = cost < best_cost;
            if improved {
                best_cost = cost;
                best_tour.copy_from_slice(&tour);
                log::debug!("new incumbent at tour {iterations}: cost {cost:.2} {tour:?}");
            }
            if let Some(t) = trace.as_deref_mut() {
                t.record(iterations, &tour, cost, improved);
            }
            if self.progress_interval > 0 && iterations % self.progress_interval == 0 {
                log::trace!(
                    "{iterations} tours evaluated in {:.2}s, best {best_cost:.2}",
                    self.started.elapsed().as_secs_f64()
                );
            }
        }

        SliceOutcome {
            best_tour,
            best_cost,
            iterations,
            stopped,
        }
    }

    fn should_stop(&self, iterations: u64, best_cost: f64) -> bool {
        if self.cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
            return true;
        }
        let Some(stop) = self.early_stop else {
            return false;
        };
        let progress = SearchProgress {
            iterations,
            best_cost,
            elapsed: self.started.elapsed(),
        };
        if stop(&progress) {
            if let Some(cancel) = self.cancel {
                cancel.store(true, Ordering::Relaxed);
            }
            log::debug!("early stop requested after {iterations} tours");
            return true;
        }
        false
    }
}
