//! Solver result types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Tour;
use crate::exact::SearchTrace;

/// Snapshot handed to early-stop predicates between evaluated tours or
/// between multi-start runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchProgress {
    /// Tours evaluated (or multi-start runs finished) so far.
    pub iterations: u64,
    /// Cost of the incumbent.
    pub best_cost: f64,
    /// Wall-clock time since the search started.
    pub elapsed: Duration,
}

/// Predicate a host supplies to end a long search early.
///
/// Returning `true` stops the search after the tour just evaluated.
pub type EarlyStop<'a> = &'a (dyn Fn(&SearchProgress) -> bool + Sync);

/// Outcome of the exhaustive search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExhaustiveResult {
    /// Lowest-cost tour found, starting at city 0.
    pub tour: Tour,
    /// Cyclic length of `tour`.
    pub cost: f64,
    /// Number of tours evaluated; `(n-1)!` for a completed search.
    pub iterations: u64,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
    /// `false` if an early-stop predicate cut the search short, in which
    /// case `tour` is only the best of the tours seen.
    pub completed: bool,
    /// Bounded record of evaluated tours, if requested.
    pub trace: Option<SearchTrace>,
}

/// One greedy extension step of the nearest-neighbor construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructionStep {
    /// Step number, starting at 1.
    pub step: usize,
    /// City the tour currently ends at.
    pub from: usize,
    /// Every unvisited city with its distance from `from`, by index.
    pub candidates: Vec<(usize, f64)>,
    /// City appended in this step.
    pub chosen: usize,
    /// Distance from `from` to `chosen`.
    pub distance: f64,
}

/// Outcome of a single nearest-neighbor construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestNeighborResult {
    /// Constructed tour, beginning at `start`.
    pub tour: Tour,
    /// Cyclic length of `tour`, closing edge included.
    pub cost: f64,
    /// Resolved start index.
    pub start: usize,
    /// Wall-clock time spent constructing.
    pub elapsed: Duration,
    /// Per-step decisions, if requested.
    pub trace: Option<Vec<ConstructionStep>>,
}

/// Result of one start in a multi-start run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartOutcome {
    /// Start index.
    pub start: usize,
    /// Tour built from `start`.
    pub tour: Tour,
    /// Cyclic length of `tour`.
    pub cost: f64,
}

/// Outcome of running nearest-neighbor from every city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiStartResult {
    /// Best run; ties go to the lowest start index.
    pub best: NearestNeighborResult,
    /// Every run, ordered by start index.
    pub per_start: Vec<StartOutcome>,
    /// Wall-clock time for all runs together.
    pub elapsed: Duration,
    /// `false` if an early-stop predicate skipped some starts.
    pub completed: bool,
}

impl MultiStartResult {
    /// Tour of the best run.
    pub fn best_tour(&self) -> &Tour {
        &self.best.tour
    }

    /// Cost of the best run.
    pub fn best_cost(&self) -> f64 {
        self.best.cost
    }

    /// Start index of the best run.
    pub fn best_start(&self) -> usize {
        self.best.start
    }
}

#[cfg(feature = "json")]
macro_rules! impl_json {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                /// Serializes this result as compact JSON.
                pub fn to_json(&self) -> crate::error::Result<String> {
                    Ok(serde_json::to_string(self)?)
                }

                /// Serializes this result as indented JSON.
                pub fn to_json_pretty(&self) -> crate::error::Result<String> {
                    Ok(serde_json::to_string_pretty(self)?)
                }
            }
        )*
    };
}

#[cfg(feature = "json")]
impl_json!(ExhaustiveResult, NearestNeighborResult, MultiStartResult);

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(start: usize, cost: f64) -> StartOutcome {
        StartOutcome {
            start,
            tour: Tour::from_order(vec![0, 1, 2]),
            cost,
        }
    }

    #[test]
    fn test_multi_start_accessors() {
        let best = NearestNeighborResult {
            tour: Tour::from_order(vec![1, 0, 2]),
            cost: 7.5,
            start: 1,
            elapsed: Duration::ZERO,
            trace: None,
        };
        let result = MultiStartResult {
            best,
            per_start: vec![outcome(0, 9.0), outcome(1, 7.5), outcome(2, 8.0)],
            elapsed: Duration::from_millis(1),
            completed: true,
        };
        assert_eq!(result.best_cost(), 7.5);
        assert_eq!(result.best_start(), 1);
        assert_eq!(result.best_tour().as_slice(), &[1, 0, 2]);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_exhaustive_to_json() {
        let result = ExhaustiveResult {
            tour: Tour::from_order(vec![0, 1]),
            cost: 2.0,
            iterations: 1,
            elapsed: Duration::ZERO,
            completed: true,
            trace: None,
        };
        let json = result.to_json().expect("serializable");
        assert!(json.contains("\"tour\":[0,1]"));
        assert!(json.contains("\"iterations\":1"));
    }
}
