//! Exact solver: exhaustive permutation search.
//!
//! - [`solve_exhaustive`] — Sequential brute force with an optional bounded trace, O(n!·n)
//! - [`solve_exhaustive_parallel`] — Same search partitioned across rayon workers
//! - [`candidate_tours`] — The tours the search visits, in order

mod exhaustive;
mod parallel;
mod permutation;
mod trace;

pub use exhaustive::{solve_exhaustive, solve_exhaustive_with};
pub use parallel::solve_exhaustive_parallel;
pub use permutation::{candidate_tours, factorial};
pub use trace::{SearchTrace, TraceEntry};
