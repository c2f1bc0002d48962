//! Parallel exhaustive search.
//!
//! The tours from city 0 are split by the city in position 1: slice `k`
//! holds the tours `[0, k, ...]`, enumerated lexicographically. Slices are
//! searched independently on the rayon pool, each with its own incumbent,
//! and reduced in slice order keeping the first strictly lower cost. Laid end
//! to end in slice order the slices reproduce the sequential search order,
//! so the result matches [`solve_exhaustive`](super::solve_exhaustive)
//! exactly.

use std::sync::atomic::AtomicBool;
use std::time::Instant;

use rayon::prelude::*;

use super::exhaustive::{log_finish, log_start, SliceOutcome, SliceSearch};
use crate::distance::DistanceMatrix;
use crate::models::{EarlyStop, ExhaustiveResult, Tour};

/// Exhaustive search with the permutation space spread over rayon workers.
///
/// `early_stop` is evaluated inside each worker against that worker's own
/// progress; once it fires in one worker every other worker stops at its
/// next check. No trace is recorded.
///
/// # Examples
///
/// ```
/// use tsp_compare::distance::{build_distance_matrix, Metric};
/// use tsp_compare::exact::{solve_exhaustive, solve_exhaustive_parallel};
/// use tsp_compare::models::City;
///
/// let cities: Vec<City> = (0..7)
///     .map(|i| {
///         let a = i as f64;
///         City::new(format!("c{i}"), (a.cos() * 10.0, (a * 1.7).sin() * 10.0))
///     })
///     .collect();
/// let dm = build_distance_matrix(&cities, Metric::Euclidean).unwrap();
///
/// let par = solve_exhaustive_parallel(&dm, None);
/// let seq = solve_exhaustive(&dm, false, None);
/// assert_eq!(par.tour, seq.tour);
/// assert_eq!(par.iterations, 720);
/// ```
pub fn solve_exhaustive_parallel(
    distances: &DistanceMatrix,
    early_stop: Option<EarlyStop<'_>>,
) -> ExhaustiveResult {
    let n = distances.size();
    let started = Instant::now();
    log_start(n);

    let cancel = AtomicBool::new(false);
    let search = SliceSearch {
        distances,
        fixed: 2,
        started,
        early_stop,
        cancel: Some(&cancel),
        progress_interval: 0,
    };

    let outcomes: Vec<SliceOutcome> = if n < 3 {
        vec![search.run((0..n).collect(), None)]
    } else {
        (1..n)
            .into_par_iter()
            .map(|second| search.run(slice_start(n, second), None))
            .collect()
    };

    let result = reduce(outcomes, started);
    log::debug!("parallel exhaustive search used {} slices", n.saturating_sub(1).max(1));
    log_finish(&result);
    result
}

/// First tour of slice `second`: `[0, second, remaining cities ascending]`.
fn slice_start(n: usize, second: usize) -> Vec<usize> {
    let mut tour = Vec::with_capacity(n);
    tour.push(0);
    tour.push(second);
    tour.extend((1..n).filter(|&c| c != second));
    tour
}

/// Lowest cost wins; equal costs keep the earlier slice.
fn reduce(outcomes: Vec<SliceOutcome>, started: Instant) -> ExhaustiveResult {
    let iterations = outcomes.iter().map(|o| o.iterations).sum();
    let completed = outcomes.iter().all(|o| !o.stopped);

    let mut best: Option<SliceOutcome> = None;
    for outcome in outcomes {
        if best.as_ref().map_or(true, |b| outcome.best_cost < b.best_cost) {
            best = Some(outcome);
        }
    }
    let (tour, cost) = match best {
        Some(b) => (b.best_tour, b.best_cost),
        None => (Vec::new(), 0.0),
    };

    ExhaustiveResult {
        tour: Tour::from_order(tour),
        cost,
        iterations,
        elapsed: started.elapsed(),
        completed,
        trace: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{build_distance_matrix, Metric};
    use crate::exact::solve_exhaustive;
    use crate::models::{City, SearchProgress};

    fn ring(n: usize) -> DistanceMatrix {
        let cities: Vec<City> = (0..n)
            .map(|i| {
                let t = i as f64 * 2.399;
                City::new(format!("r{i}"), (t.cos() * (5.0 + i as f64), t.sin() * 7.0))
            })
            .collect();
        build_distance_matrix(&cities, Metric::Euclidean).expect("valid")
    }

    #[test]
    fn test_slice_start() {
        assert_eq!(slice_start(5, 3), vec![0, 3, 1, 2, 4]);
        assert_eq!(slice_start(3, 1), vec![0, 1, 2]);
    }

    #[test]
    fn test_matches_sequential() {
        for n in 1..=8 {
            let dm = ring(n);
            let seq = solve_exhaustive(&dm, false, None);
            let par = solve_exhaustive_parallel(&dm, None);
            assert_eq!(par.tour, seq.tour, "n = {n}");
            assert_eq!(par.cost, seq.cost, "n = {n}");
            assert_eq!(par.iterations, seq.iterations, "n = {n}");
            assert!(par.completed);
            assert!(par.trace.is_none());
        }
    }

    #[test]
    fn test_tie_keeps_earliest_slice() {
        // Unit square: [0,1,2,3] (slice 1) and [0,3,2,1] (slice 3) both cost 4.
        let cities = vec![
            City::new("a", (0.0, 0.0)),
            City::new("b", (0.0, 1.0)),
            City::new("c", (1.0, 1.0)),
            City::new("d", (1.0, 0.0)),
        ];
        let dm = build_distance_matrix(&cities, Metric::Euclidean).expect("valid");
        let par = solve_exhaustive_parallel(&dm, None);
        assert_eq!(par.tour.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_early_stop_marks_incomplete() {
        let dm = ring(8);
        let stop = |p: &SearchProgress| p.iterations >= 3;
        let par = solve_exhaustive_parallel(&dm, Some(&stop));
        assert!(!par.completed);
        assert!(par.iterations < 5040);
        assert_eq!(par.tour.len(), 8);
    }
}
