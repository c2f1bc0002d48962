//! Random problem instances.

use std::ops::RangeInclusive;

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, TspError};
use crate::models::City;

/// Generates `n` cities with coordinates drawn uniformly from the given ranges.
///
/// Cities are labelled `C0`, `C1`, … in generation order. The same `seed`
/// always yields the same cities; `None` draws a fresh seed from the OS.
///
/// Returns [`TspError::InvalidInput`] if a range is empty, not finite, or too
/// wide to sample from.
///
/// # Examples
///
/// ```
/// use tsp_compare::generate::random_cities;
///
/// let a = random_cities(5, 0.0..=100.0, 0.0..=100.0, Some(42)).unwrap();
/// let b = random_cities(5, 0.0..=100.0, 0.0..=100.0, Some(42)).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a[3].label(), "C3");
/// ```
pub fn random_cities(
    n: usize,
    x_range: RangeInclusive<f64>,
    y_range: RangeInclusive<f64>,
    seed: Option<u64>,
) -> Result<Vec<City>> {
    let x = uniform("x", &x_range)?;
    let y = uniform("y", &y_range)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(sample(&mut rng, n, &x, &y))
}

fn sample<R: Rng>(rng: &mut R, n: usize, x: &Uniform<f64>, y: &Uniform<f64>) -> Vec<City> {
    (0..n)
        .map(|i| City::new(format!("C{i}"), (x.sample(rng), y.sample(rng))))
        .collect()
}

fn uniform(axis: &str, range: &RangeInclusive<f64>) -> Result<Uniform<f64>> {
    let (lo, hi) = (*range.start(), *range.end());
    Uniform::new_inclusive(lo, hi).map_err(|e| {
        TspError::invalid_input(format!("{axis} range {lo}..={hi} cannot be sampled: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_bounds() {
        let cities = random_cities(50, -10.0..=10.0, 5.0..=6.0, Some(7)).expect("valid ranges");
        assert_eq!(cities.len(), 50);
        for c in &cities {
            assert!((-10.0..=10.0).contains(&c.coord().a()));
            assert!((5.0..=6.0).contains(&c.coord().b()));
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = random_cities(8, 0.0..=1.0, 0.0..=1.0, Some(1)).expect("valid ranges");
        let b = random_cities(8, 0.0..=1.0, 0.0..=1.0, Some(2)).expect("valid ranges");
        assert_ne!(a, b);
    }

    #[test]
    fn test_degenerate_range() {
        let cities = random_cities(3, 2.0..=2.0, 0.0..=1.0, Some(3)).expect("valid ranges");
        assert!(cities.iter().all(|c| c.coord().a() == 2.0));
    }

    #[test]
    fn test_invalid_range() {
        assert!(random_cities(3, 1.0..=0.0, 0.0..=1.0, Some(3)).is_err());
        assert!(random_cities(3, 0.0..=f64::NAN, 0.0..=1.0, Some(3)).is_err());
        assert!(random_cities(3, 0.0..=1.0, f64::NEG_INFINITY..=0.0, Some(3)).is_err());
    }

    #[test]
    fn test_overflowing_range_is_invalid_input() {
        let err = random_cities(3, -f64::MAX..=f64::MAX, 0.0..=1.0, Some(3)).unwrap_err();
        assert!(matches!(err, TspError::InvalidInput(_)));
    }

    #[test]
    fn test_unseeded() {
        let cities = random_cities(4, 0.0..=1.0, 0.0..=1.0, None).expect("valid ranges");
        assert_eq!(cities.len(), 4);
    }
}
