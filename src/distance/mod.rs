//! Distance metrics and the dense distance matrix.
//!
//! The metric is a parameter of matrix construction, so callers can switch
//! between planar and great-circle distance without touching the solvers.

mod matrix;
mod metric;

pub use matrix::{build_distance_matrix, DistanceMatrix};
pub use metric::{DistanceMetric, Euclidean, Haversine, Metric, EARTH_RADIUS_KM};
