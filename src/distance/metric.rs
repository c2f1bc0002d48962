//! Point-to-point distance metrics.

use serde::{Deserialize, Serialize};

use crate::models::Coord;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Converts two coordinate pairs into a non-negative scalar cost.
///
/// Implementations must be symmetric: `distance(a, b) == distance(b, a)`.
pub trait DistanceMetric {
    /// Distance from `a` to `b`.
    fn distance(&self, a: Coord, b: Coord) -> f64;
}

/// Planar straight-line distance, `sqrt(dx² + dy²)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    fn distance(&self, a: Coord, b: Coord) -> f64 {
        let dx = a.a() - b.a();
        let dy = a.b() - b.b();
        (dx * dx + dy * dy).sqrt()
    }
}

/// Great-circle distance between `(latitude, longitude)` pairs in degrees.
///
/// # Examples
///
/// ```
/// use tsp_compare::distance::{DistanceMetric, Haversine};
/// use tsp_compare::models::Coord;
///
/// // A quarter of the equator.
/// let d = Haversine::default().distance(Coord::new(0.0, 0.0), Coord::new(0.0, 90.0));
/// assert!((d - std::f64::consts::FRAC_PI_2 * 6371.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Haversine {
    radius: f64,
}

impl Haversine {
    /// Haversine on a sphere of the given radius; the result uses the same unit.
    pub fn with_radius(radius: f64) -> Self {
        Self { radius }
    }

    /// Sphere radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Default for Haversine {
    fn default() -> Self {
        Self::with_radius(EARTH_RADIUS_KM)
    }
}

impl DistanceMetric for Haversine {
    fn distance(&self, p: Coord, q: Coord) -> f64 {
        let lat1 = p.a().to_radians();
        let lat2 = q.a().to_radians();
        let dlat = lat2 - lat1;
        let dlon = (q.b() - p.b()).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        // Rounding can push `a` a hair past 1 for antipodal points.
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        self.radius * c
    }
}

/// Metric selection for configuration files and callers.
///
/// # Examples
///
/// ```
/// use tsp_compare::distance::{DistanceMetric, Metric};
/// use tsp_compare::models::Coord;
///
/// let d = Metric::Euclidean.distance(Coord::new(0.0, 0.0), Coord::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Planar `(x, y)` distance.
    #[default]
    Euclidean,
    /// Great-circle distance in kilometres over `(lat, lon)` degrees.
    Haversine,
}

impl DistanceMetric for Metric {
    fn distance(&self, a: Coord, b: Coord) -> f64 {
        match self {
            Metric::Euclidean => Euclidean.distance(a, b),
            Metric::Haversine => Haversine::default().distance(a, b),
        }
    }
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance(&self, a: Coord, b: Coord) -> f64 {
        (**self).distance(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_345() {
        let d = Euclidean.distance(Coord::new(0.0, 0.0), Coord::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_haversine_same_point_is_zero() {
        let p = Coord::new(-1.2833, 36.8167);
        assert!(Haversine::default().distance(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_symmetric() {
        let nairobi = Coord::new(-1.2833, 36.8167);
        let moscow = Coord::new(55.7517, 37.6178);
        let h = Haversine::default();
        assert!((h.distance(nairobi, moscow) - h.distance(moscow, nairobi)).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        // One degree along a meridian is R * pi / 180.
        let d = Haversine::default().distance(Coord::new(10.0, 20.0), Coord::new(11.0, 20.0));
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_antipodal() {
        let d = Haversine::default().distance(Coord::new(0.0, 0.0), Coord::new(0.0, 180.0));
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_custom_radius() {
        let unit = Haversine::with_radius(1.0);
        let d = unit.distance(Coord::new(0.0, 0.0), Coord::new(0.0, 90.0));
        assert!((d - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(unit.radius(), 1.0);
    }

    #[test]
    fn test_metric_dispatch() {
        let a = Coord::new(0.0, 0.0);
        let b = Coord::new(0.0, 90.0);
        assert_eq!(Metric::Euclidean.distance(a, b), Euclidean.distance(a, b));
        assert_eq!(Metric::Haversine.distance(a, b), Haversine::default().distance(a, b));
        assert_eq!(Metric::default(), Metric::Euclidean);
    }
}
