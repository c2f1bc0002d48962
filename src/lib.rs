//! # tsp-compare
//!
//! Exact and heuristic solvers for the travelling-salesman problem over
//! small city sets, with the pieces needed to compare them.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Tour, StartSpec, solver results)
//! - [`distance`] — Distance metrics (Euclidean, haversine) and the distance matrix
//! - [`evaluation`] — Cyclic tour cost
//! - [`exact`] — Exhaustive permutation search, sequential and parallel
//! - [`constructive`] — Nearest-neighbor heuristic, single and multi-start
//! - [`comparison`] — Optimality gap and speed-up between two results
//! - [`config`] — Solver settings
//! - [`generate`] — Seeded random instances
//!
//! ## Example
//!
//! ```
//! use tsp_compare::comparison::Comparison;
//! use tsp_compare::constructive::solve_nearest_neighbor;
//! use tsp_compare::distance::{build_distance_matrix, Metric};
//! use tsp_compare::exact::solve_exhaustive;
//! use tsp_compare::models::City;
//!
//! let cities = vec![
//!     City::new("Nairobi", (-1.2833, 36.8167)),
//!     City::new("Osorno", (-40.5739, -73.1360)),
//!     City::new("Rancagua", (-34.1667, -70.7333)),
//!     City::new("Pamplona", (42.8167, -1.6500)),
//!     City::new("Moscu", (55.7517, 37.6178)),
//! ];
//! let dm = build_distance_matrix(&cities, Metric::Haversine).unwrap();
//!
//! let exact = solve_exhaustive(&dm, false, None);
//! let greedy = solve_nearest_neighbor(&dm, "Nairobi", false).unwrap();
//! let report = Comparison::nearest_neighbor(&greedy, &exact);
//! assert!(report.gap_percent >= -1e-9);
//! ```

pub mod comparison;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod generate;
pub mod models;

pub use distance::build_distance_matrix;
pub use error::{Result, TspError};
pub use evaluation::tour_cost;
