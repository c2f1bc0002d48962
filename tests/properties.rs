use proptest::prelude::*;

use tsp_compare::constructive::{solve_nearest_neighbor, solve_nearest_neighbor_multi_start};
use tsp_compare::distance::{build_distance_matrix, DistanceMatrix, Metric};
use tsp_compare::exact::{candidate_tours, factorial, solve_exhaustive, solve_exhaustive_parallel};
use tsp_compare::models::{City, Tour};
use tsp_compare::tour_cost;

fn build(points: &[(f64, f64)], metric: Metric) -> DistanceMatrix {
    let cities: Vec<City> = points
        .iter()
        .enumerate()
        .map(|(i, &p)| City::new(format!("p{i}"), p))
        .collect();
    build_distance_matrix(&cities, metric).expect("finite, uniquely labelled cities")
}

fn planar(max: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1..=max)
}

fn geographic(max: usize) -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-89.0f64..89.0, -179.0f64..179.0), 1..=max)
}

fn planar_with_tour() -> impl Strategy<Value = (Vec<(f64, f64)>, Vec<usize>)> {
    planar(9).prop_flat_map(|pts| {
        let n = pts.len();
        (Just(pts), Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matrix_has_zero_diagonal_and_is_symmetric(pts in planar(10), geo in geographic(10)) {
        for dm in [build(&pts, Metric::Euclidean), build(&geo, Metric::Haversine)] {
            for i in 0..dm.size() {
                prop_assert_eq!(dm.get(i, i), 0.0);
                for j in 0..dm.size() {
                    prop_assert_eq!(dm.get(i, j), dm.get(j, i));
                    prop_assert!(dm.get(i, j) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn tour_cost_ignores_rotation_and_direction((pts, order) in planar_with_tour(), shift in 0usize..16) {
        let dm = build(&pts, Metric::Euclidean);
        let base = tour_cost(&order, &dm).expect("permutation");
        prop_assert!(base >= 0.0);

        let tour = Tour::new(order.clone(), dm.size()).expect("permutation");
        let pivot = order[shift % order.len()];
        let rotated = tour_cost(tour.rotated_to(pivot).as_slice(), &dm).expect("permutation");
        let reversed = tour_cost(tour.reversed().as_slice(), &dm).expect("permutation");
        prop_assert!(close(base, rotated), "{} vs {}", base, rotated);
        prop_assert!(close(base, reversed), "{} vs {}", base, reversed);
    }

    #[test]
    fn exhaustive_parallel_agrees(pts in planar(7)) {
        let dm = build(&pts, Metric::Euclidean);
        let seq = solve_exhaustive(&dm, false, None);
        let par = solve_exhaustive_parallel(&dm, None);
        prop_assert_eq!(seq.tour, par.tour);
        prop_assert_eq!(seq.cost, par.cost);
        prop_assert_eq!(seq.iterations, par.iterations);
    }

    #[test]
    fn nearest_neighbor_visits_every_city_once(geo in geographic(12)) {
        let dm = build(&geo, Metric::Haversine);
        for start in 0..dm.size() {
            let result = solve_nearest_neighbor(&dm, start, false).expect("known start");
            prop_assert!(Tour::new(result.tour.as_slice().to_vec(), dm.size()).is_ok());
            prop_assert_eq!(result.tour.start(), Some(start));
            let recomputed = tour_cost(result.tour.as_slice(), &dm).expect("permutation");
            prop_assert!(close(result.cost, recomputed));
        }
    }

    #[test]
    fn multi_start_never_loses_to_a_fixed_start(pts in planar(12)) {
        let dm = build(&pts, Metric::Euclidean);
        let multi = solve_nearest_neighbor_multi_start(&dm, None);
        prop_assert_eq!(multi.per_start.len(), dm.size());
        for start in 0..dm.size() {
            let single = solve_nearest_neighbor(&dm, start, false).expect("known start");
            prop_assert!(multi.best_cost() <= single.cost);
        }
    }

    #[test]
    fn heuristics_never_beat_the_optimum(pts in planar(7)) {
        let dm = build(&pts, Metric::Euclidean);
        let exact = solve_exhaustive(&dm, false, None);
        let multi = solve_nearest_neighbor_multi_start(&dm, None);
        prop_assert!(multi.best_cost() >= exact.cost - 1e-9);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn exhaustive_is_the_minimum_of_all_candidates(pts in planar(8)) {
        let dm = build(&pts, Metric::Euclidean);
        let result = solve_exhaustive(&dm, false, None);

        let mut costs: Vec<f64> = candidate_tours(dm.size(), usize::MAX)
            .iter()
            .map(|t| tour_cost(t.as_slice(), &dm).expect("permutation"))
            .collect();
        prop_assert_eq!(costs.len() as u64, factorial(dm.size() - 1).expect("small n"));
        prop_assert_eq!(result.iterations, costs.len() as u64);
        for &c in &costs {
            prop_assert!(result.cost <= c);
        }
        costs.sort_by(f64::total_cmp);
        prop_assert_eq!(result.cost, costs[0]);
    }
}
