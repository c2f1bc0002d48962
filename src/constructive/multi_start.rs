//! Multi-start nearest neighbor.
//!
//! Runs the greedy construction once from every city and keeps the
//! cheapest tour. O(n³) in total; the runs only read the matrix, so the
//! parallel variant hands one start to each rayon task and reduces the same
//! way.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

use rayon::prelude::*;

use super::nearest_neighbor::construct;
use crate::distance::DistanceMatrix;
use crate::models::{
    EarlyStop, MultiStartResult, NearestNeighborResult, SearchProgress, StartOutcome,
};

/// Runs nearest neighbor from every start and returns the best run.
///
/// Equal costs keep the lowest start index. The best cost is never above the
/// cost of any single fixed start on the same matrix.
///
/// `early_stop` is checked between starts with the number of finished runs
/// and the best cost so far; when it fires the remaining starts are skipped
/// and the result is marked incomplete.
///
/// # Examples
///
/// ```
/// use tsp_compare::constructive::{solve_nearest_neighbor, solve_nearest_neighbor_multi_start};
/// use tsp_compare::distance::{build_distance_matrix, Metric};
/// use tsp_compare::models::City;
///
/// let cities = vec![
///     City::new("far", (10.0, 0.0)),
///     City::new("a", (0.0, 0.0)),
///     City::new("b", (0.5, 0.0)),
///     City::new("c", (0.0, 0.5)),
/// ];
/// let dm = build_distance_matrix(&cities, Metric::Euclidean).unwrap();
///
/// let multi = solve_nearest_neighbor_multi_start(&dm, None);
/// assert_eq!(multi.per_start.len(), 4);
/// assert!(multi.completed);
/// for start in 0..4usize {
///     let single = solve_nearest_neighbor(&dm, start, false).unwrap();
///     assert!(multi.best_cost() <= single.cost);
/// }
/// ```
pub fn solve_nearest_neighbor_multi_start(
    distances: &DistanceMatrix,
    early_stop: Option<EarlyStop<'_>>,
) -> MultiStartResult {
    let started = Instant::now();
    let n = distances.size();
    let mut runs = Vec::with_capacity(n);
    let mut best_cost = f64::INFINITY;

    for start in 0..n {
        if let Some(stop) = early_stop.filter(|_| !runs.is_empty()) {
            let progress = SearchProgress {
                iterations: runs.len() as u64,
                best_cost,
                elapsed: started.elapsed(),
            };
            if stop(&progress) {
                log::debug!("multi-start stopped early after {} starts", runs.len());
                break;
            }
        }
        let run = construct(distances, start, false);
        best_cost = best_cost.min(run.cost);
        runs.push(run);
    }

    let completed = runs.len() == n;
    select_best(runs, started, completed)
}

/// [`solve_nearest_neighbor_multi_start`] with the starts run on the rayon pool.
///
/// Without an early stop it returns exactly what the sequential version
/// returns, apart from timings. With one, the predicate sees the number of
/// runs finished across all workers and the best cost among them; once it
/// fires, starts not yet begun are skipped, so `per_start` may have gaps.
pub fn solve_nearest_neighbor_multi_start_parallel(
    distances: &DistanceMatrix,
    early_stop: Option<EarlyStop<'_>>,
) -> MultiStartResult {
    let started = Instant::now();
    let n = distances.size();
    let cancel = AtomicBool::new(false);
    let finished = AtomicU64::new(0);
    // Costs are non-negative, so their bit patterns order like the values.
    let best_bits = AtomicU64::new(f64::INFINITY.to_bits());

    let runs: Vec<NearestNeighborResult> = (0..n)
        .into_par_iter()
        .filter_map(|start| {
            if cancel.load(Ordering::Relaxed) {
                return None;
            }
            let run = construct(distances, start, false);
            let done = finished.fetch_add(1, Ordering::Relaxed) + 1;
            let best = best_bits
                .fetch_min(run.cost.to_bits(), Ordering::Relaxed)
                .min(run.cost.to_bits());
            if let Some(stop) = early_stop {
                let progress = SearchProgress {
                    iterations: done,
                    best_cost: f64::from_bits(best),
                    elapsed: started.elapsed(),
                };
                if done < n as u64 && stop(&progress) {
                    cancel.store(true, Ordering::Relaxed);
                    log::debug!("parallel multi-start stopped early after {done} starts");
                }
            }
            Some(run)
        })
        .collect();

    let completed = runs.len() == n;
    select_best(runs, started, completed)
}

fn select_best(
    mut runs: Vec<NearestNeighborResult>,
    started: Instant,
    completed: bool,
) -> MultiStartResult {
    let mut best_idx = 0;
    for (i, run) in runs.iter().enumerate() {
        if run.cost < runs[best_idx].cost {
            best_idx = i;
        }
    }

    let per_start: Vec<StartOutcome> = runs
        .iter()
        .map(|run| StartOutcome {
            start: run.start,
            tour: run.tour.clone(),
            cost: run.cost,
        })
        .collect();
    let best = runs.swap_remove(best_idx);

    log::info!(
        "multi-start nearest neighbor: best start {} with cost {:.2} over {} starts{}",
        best.start,
        best.cost,
        per_start.len(),
        if completed { "" } else { " (stopped early)" }
    );

    MultiStartResult {
        best,
        per_start,
        elapsed: started.elapsed(),
        completed,
    }
}
