//! Cyclic tour length.

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::validate_tour;

/// Computes the length of a closed tour, including the edge back to the start.
///
/// `tour` must be a permutation of `0..distances.size()`; otherwise
/// [`TspError::InvalidTour`](crate::TspError::InvalidTour) is returned.
///
/// # Examples
///
/// ```
/// use tsp_compare::distance::{build_distance_matrix, Metric};
/// use tsp_compare::evaluation::tour_cost;
/// use tsp_compare::models::City;
///
/// let cities = vec![
///     City::new("a", (0.0, 0.0)),
///     City::new("b", (0.0, 1.0)),
///     City::new("c", (1.0, 1.0)),
///     City::new("d", (1.0, 0.0)),
/// ];
/// let dm = build_distance_matrix(&cities, Metric::Euclidean).unwrap();
/// assert!((tour_cost(&[0, 1, 2, 3], &dm).unwrap() - 4.0).abs() < 1e-10);
/// assert!(tour_cost(&[0, 1, 2], &dm).is_err());
/// ```
pub fn tour_cost(tour: &[usize], distances: &DistanceMatrix) -> Result<f64> {
    validate_tour(tour, distances.size())?;
    Ok(cycle_length(tour, distances))
}

/// Sum of `d(tour[i], tour[(i+1) % n])` without validating `tour`.
///
/// Callers must pass indices within the matrix.
#[inline]
pub(crate) fn cycle_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let n = tour.len();
    if n < 2 {
        return 0.0;
    }
    let mut dist = distances.get(tour[n - 1], tour[0]);
    for w in tour.windows(2) {
        dist += distances.get(w[0], w[1]);
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{build_distance_matrix, Metric};
    use crate::error::TspError;
    use crate::models::City;

    fn line_cities() -> DistanceMatrix {
        let cities = vec![
            City::new("0", (0.0, 0.0)),
            City::new("1", (1.0, 0.0)),
            City::new("2", (2.0, 0.0)),
            City::new("3", (3.0, 0.0)),
        ];
        build_distance_matrix(&cities, Metric::Euclidean).expect("valid")
    }

    #[test]
    fn test_closes_cycle() {
        let dm = line_cities();
        // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3 = 6
        let cost = tour_cost(&[0, 1, 2, 3], &dm).expect("valid tour");
        assert!((cost - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_crossing_tour_is_longer() {
        let dm = line_cities();
        // 0→2 + 2→1 + 1→3 + 3→0 = 2 + 1 + 2 + 3 = 8
        let cost = tour_cost(&[0, 2, 1, 3], &dm).expect("valid tour");
        assert!((cost - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_city_costs_nothing() {
        let dm = DistanceMatrix::from_data(1, vec![0.0]).expect("valid");
        assert_eq!(tour_cost(&[0], &dm).expect("valid tour"), 0.0);
    }

    #[test]
    fn test_two_cities_counts_both_directions() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 3.0, 3.0, 0.0]).expect("valid");
        assert_eq!(tour_cost(&[1, 0], &dm).expect("valid tour"), 6.0);
    }

    #[test]
    fn test_missing_index() {
        let dm = line_cities();
        assert!(matches!(
            tour_cost(&[0, 1, 2], &dm),
            Err(TspError::InvalidTour(_))
        ));
    }

    #[test]
    fn test_duplicate_index() {
        let dm = line_cities();
        assert!(matches!(
            tour_cost(&[0, 1, 1, 2], &dm),
            Err(TspError::InvalidTour(_))
        ));
    }

    #[test]
    fn test_out_of_range_index() {
        let dm = line_cities();
        assert!(matches!(
            tour_cost(&[0, 1, 2, 7], &dm),
            Err(TspError::InvalidTour(_))
        ));
    }
}
