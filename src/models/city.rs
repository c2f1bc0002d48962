//! City and coordinate types.

use serde::{Deserialize, Serialize};

/// A coordinate pair.
///
/// Interpreted as `(latitude, longitude)` in degrees by the haversine metric
/// and as planar `(x, y)` by the Euclidean metric.
///
/// # Examples
///
/// ```
/// use tsp_compare::models::Coord;
///
/// let c = Coord::new(-33.45, -70.66);
/// assert_eq!(c.a(), -33.45);
/// assert!(c.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    a: f64,
    b: f64,
}

impl Coord {
    /// Creates a coordinate pair.
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// First component (latitude or x).
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Second component (longitude or y).
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns `true` if neither component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite()
    }
}

impl From<(f64, f64)> for Coord {
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

/// A labeled point to visit.
///
/// The label is the city's identity. Its matrix index is its position in
/// the input list.
///
/// # Examples
///
/// ```
/// use tsp_compare::models::City;
///
/// let c = City::new("Osorno", (-40.5739, -73.1360));
/// assert_eq!(c.label(), "Osorno");
/// assert_eq!(c.coord().b(), -73.1360);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    label: String,
    coord: Coord,
}

impl City {
    /// Creates a city.
    pub fn new(label: impl Into<String>, coord: impl Into<Coord>) -> Self {
        Self {
            label: label.into(),
            coord: coord.into(),
        }
    }

    /// Unique label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Position of this city.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_from_tuple() {
        let c: Coord = (1.5, -2.0).into();
        assert_eq!(c.a(), 1.5);
        assert_eq!(c.b(), -2.0);
    }

    #[test]
    fn test_coord_non_finite() {
        assert!(!Coord::new(f64::NAN, 0.0).is_finite());
        assert!(!Coord::new(0.0, f64::INFINITY).is_finite());
        assert!(Coord::new(0.0, 0.0).is_finite());
    }

    #[test]
    fn test_city_new() {
        let c = City::new("Nairobi", Coord::new(-1.2833, 36.8167));
        assert_eq!(c.label(), "Nairobi");
        assert_eq!(c.coord(), Coord::new(-1.2833, 36.8167));
    }
}
