//! Constructive heuristics for building tours quickly.
//!
//! - [`solve_nearest_neighbor`] — Greedy nearest-neighbor from one start, O(n²)
//! - [`solve_nearest_neighbor_multi_start`] — Nearest neighbor from every start, O(n³)
//! - [`solve_nearest_neighbor_multi_start_parallel`] — Same, with starts on the rayon pool

mod multi_start;
mod nearest_neighbor;

pub use multi_start::{
    solve_nearest_neighbor_multi_start, solve_nearest_neighbor_multi_start_parallel,
};
pub use nearest_neighbor::solve_nearest_neighbor;
