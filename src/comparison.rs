//! Heuristic-versus-exact comparison.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{ExhaustiveResult, MultiStartResult, NearestNeighborResult};

/// Relative excess of `heuristic_cost` over `optimal_cost`, in percent.
///
/// Zero when both costs are zero (a single city).
///
/// # Examples
///
/// ```
/// use tsp_compare::comparison::optimality_gap;
///
/// assert!((optimality_gap(110.0, 100.0) - 10.0).abs() < 1e-12);
/// assert_eq!(optimality_gap(0.0, 0.0), 0.0);
/// ```
pub fn optimality_gap(heuristic_cost: f64, optimal_cost: f64) -> f64 {
    if optimal_cost == 0.0 {
        return if heuristic_cost == 0.0 { 0.0 } else { f64::INFINITY };
    }
    (heuristic_cost - optimal_cost) / optimal_cost * 100.0
}

/// Side-by-side summary of a heuristic run and the exact optimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Heuristic tour cost.
    pub heuristic_cost: f64,
    /// Exact (or best found, if the search was stopped) tour cost.
    pub exact_cost: f64,
    /// `heuristic_cost - exact_cost`.
    pub difference: f64,
    /// Gap in percent, see [`optimality_gap`].
    pub gap_percent: f64,
    /// Heuristic wall-clock time.
    pub heuristic_time: Duration,
    /// Exact search wall-clock time.
    pub exact_time: Duration,
    /// How many times faster the heuristic ran; `None` if it took no
    /// measurable time.
    pub speedup: Option<f64>,
    /// Whether `exact_cost` comes from a completed search.
    pub exact_completed: bool,
}

impl Comparison {
    /// Builds a comparison from raw costs and timings.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use tsp_compare::comparison::Comparison;
    ///
    /// let c = Comparison::new(12.0, Duration::from_millis(1), 10.0, Duration::from_millis(50));
    /// assert!((c.gap_percent - 20.0).abs() < 1e-12);
    /// assert!((c.difference - 2.0).abs() < 1e-12);
    /// assert!((c.speedup.unwrap() - 50.0).abs() < 1e-9);
    /// ```
    pub fn new(
        heuristic_cost: f64,
        heuristic_time: Duration,
        exact_cost: f64,
        exact_time: Duration,
    ) -> Self {
        let speedup = if heuristic_time.is_zero() {
            None
        } else {
            Some(exact_time.as_secs_f64() / heuristic_time.as_secs_f64())
        };
        Self {
            heuristic_cost,
            exact_cost,
            difference: heuristic_cost - exact_cost,
            gap_percent: optimality_gap(heuristic_cost, exact_cost),
            heuristic_time,
            exact_time,
            speedup,
            exact_completed: true,
        }
    }

    /// Compares a single nearest-neighbor run with the exhaustive result.
    pub fn nearest_neighbor(heuristic: &NearestNeighborResult, exact: &ExhaustiveResult) -> Self {
        let mut c = Self::new(heuristic.cost, heuristic.elapsed, exact.cost, exact.elapsed);
        c.exact_completed = exact.completed;
        c
    }

    /// Compares the best multi-start run with the exhaustive result.
    pub fn multi_start(heuristic: &MultiStartResult, exact: &ExhaustiveResult) -> Self {
        let mut c = Self::new(heuristic.best_cost(), heuristic.elapsed, exact.cost, exact.elapsed);
        c.exact_completed = exact.completed;
        c
    }

    /// `true` if the heuristic matched the exact cost within `tol`.
    pub fn is_optimal(&self, tol: f64) -> bool {
        self.difference.abs() <= tol
    }

    /// Serializes the comparison as indented JSON.
    #[cfg(feature = "json")]
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
