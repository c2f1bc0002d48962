//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a chosen city, always move to the
//! nearest unvisited city, then close the cycle back to the start.
//!
//! # Complexity
//!
//! O(n²) time, O(n) space.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Tours typically land
//! 15-25% above optimal and depend strongly on the start city.

use std::time::Instant;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::evaluation::cycle_length;
use crate::models::{ConstructionStep, NearestNeighborResult, StartSpec, Tour};

/// Constructs a tour with the nearest-neighbor heuristic.
///
/// `start` may be an index or a city label; it is resolved once against the
/// matrix and fails with [`TspError::UnknownCity`](crate::TspError::UnknownCity)
/// if it names no loaded city. Ties between equally near cities go to the
/// lowest index. With `record_trace`, every step's candidates and choice are
/// returned alongside the tour.
///
/// # Examples
///
/// ```
/// use tsp_compare::constructive::solve_nearest_neighbor;
/// use tsp_compare::distance::{build_distance_matrix, Metric};
/// use tsp_compare::models::City;
///
/// let cities = vec![
///     City::new("depot", (0.0, 0.0)),
///     City::new("one", (1.0, 0.0)),
///     City::new("two", (2.0, 0.0)),
///     City::new("three", (3.0, 0.0)),
/// ];
/// let dm = build_distance_matrix(&cities, Metric::Euclidean).unwrap();
///
/// let result = solve_nearest_neighbor(&dm, "depot", false).unwrap();
/// assert_eq!(result.tour.as_slice(), &[0, 1, 2, 3]);
/// assert!((result.cost - 6.0).abs() < 1e-10);
///
/// assert!(solve_nearest_neighbor(&dm, "nowhere", false).is_err());
/// ```
pub fn solve_nearest_neighbor(
    distances: &DistanceMatrix,
    start: impl Into<StartSpec>,
    record_trace: bool,
) -> Result<NearestNeighborResult> {
    let start = distances.resolve(&start.into())?;
    Ok(construct(distances, start, record_trace))
}

/// Greedy construction from an already-resolved start index.
pub(super) fn construct(
    distances: &DistanceMatrix,
    start: usize,
    record_trace: bool,
) -> NearestNeighborResult {
    let started = Instant::now();
    let n = distances.size();

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut steps: Option<Vec<ConstructionStep>> = record_trace.then(Vec::new);
    let mut current = start;

    while tour.len() < n {
        let unvisited: Vec<usize> = (0..n).filter(|&c| !visited[c]).collect();
        let Some(next) = distances.nearest_neighbor(current, &unvisited) else {
            break;
        };
        let d = distances.get(current, next);
        log::trace!("nn step {}: {current} -> {next} ({d:.2})", tour.len());
        if let Some(steps) = steps.as_mut() {
            steps.push(ConstructionStep {
                step: tour.len(),
                from: current,
                candidates: unvisited
                    .iter()
                    .map(|&c| (c, distances.get(current, c)))
                    .collect(),
                chosen: next,
                distance: d,
            });
        }
        visited[next] = true;
        tour.push(next);
        current = next;
    }

    let cost = cycle_length(&tour, distances);
    log::debug!("nearest neighbor from {start}: cost {cost:.2}");

    NearestNeighborResult {
        tour: Tour::from_order(tour),
        cost,
        start,
        elapsed: started.elapsed(),
        trace: steps,
    }
}
