//! Dense distance matrix.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::DistanceMetric;
use crate::error::{Result, TspError};
use crate::models::{City, StartSpec};

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per city set and never mutated afterwards, so it can be shared
/// by reference across solvers and threads.
///
/// # Examples
///
/// ```
/// use tsp_compare::distance::{build_distance_matrix, Metric};
/// use tsp_compare::models::City;
///
/// let cities = vec![
///     City::new("a", (0.0, 0.0)),
///     City::new("b", (3.0, 4.0)),
///     City::new("c", (6.0, 8.0)),
/// ];
/// let dm = build_distance_matrix(&cities, Metric::Euclidean).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.index_of("c"), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
    labels: Option<Vec<String>>,
}

/// Unchecked wire form of [`DistanceMatrix`].
#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<f64>,
    size: usize,
    #[serde(default)]
    labels: Option<Vec<String>>,
}

impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = TspError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        let mut dm = Self::from_data(raw.size, raw.data)?;
        if let Some(labels) = raw.labels {
            if labels.len() != dm.size {
                return Err(TspError::invalid_input(format!(
                    "{} labels for a {}x{} matrix",
                    labels.len(),
                    dm.size,
                    dm.size
                )));
            }
            let mut seen = HashSet::with_capacity(labels.len());
            if let Some(dup) = labels.iter().find(|l| !seen.insert(l.as_str())) {
                return Err(TspError::invalid_input(format!(
                    "duplicate city label '{dup}'"
                )));
            }
            dm.labels = Some(labels);
        }
        Ok(dm)
    }
}

/// Builds the pairwise distance matrix for `cities` using `metric`.
///
/// City `i` in the input becomes row and column `i`. The diagonal is zero.
///
/// Returns [`TspError::InvalidInput`] if `cities` is empty, a coordinate is
/// NaN or infinite, or two cities share a label.
pub fn build_distance_matrix<M: DistanceMetric>(
    cities: &[City],
    metric: M,
) -> Result<DistanceMatrix> {
    DistanceMatrix::from_cities(cities, metric)
}

impl DistanceMatrix {
    fn zeroed(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
            labels: None,
        }
    }

    /// Computes the matrix from city coordinates with the given metric.
    ///
    /// See [`build_distance_matrix`].
    pub fn from_cities<M: DistanceMetric>(cities: &[City], metric: M) -> Result<Self> {
        let n = cities.len();
        if n == 0 {
            return Err(TspError::invalid_input("city list is empty"));
        }

        let mut labels = HashSet::with_capacity(n);
        for city in cities {
            if !city.coord().is_finite() {
                return Err(TspError::invalid_input(format!(
                    "city '{}' has a non-finite coordinate",
                    city.label()
                )));
            }
            if !labels.insert(city.label()) {
                return Err(TspError::invalid_input(format!(
                    "duplicate city label '{}'",
                    city.label()
                )));
            }
        }

        let mut dm = Self::zeroed(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.distance(cities[i].coord(), cities[j].coord());
                if !d.is_finite() || d < 0.0 {
                    return Err(TspError::invalid_input(format!(
                        "metric returned {d} between '{}' and '{}'",
                        cities[i].label(),
                        cities[j].label()
                    )));
                }
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm.labels = Some(cities.iter().map(|c| c.label().to_string()).collect());

        log::debug!("built {n}x{n} distance matrix");
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns [`TspError::InvalidInput`] if `size` is zero, the data length
    /// doesn't match `size * size`, an entry is negative or non-finite, or
    /// the diagonal is not zero.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(TspError::invalid_input("matrix size is zero"));
        }
        if data.len() != size * size {
            return Err(TspError::invalid_input(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(TspError::invalid_input(format!(
                "entry ({}, {}) is {}",
                pos / size,
                pos % size,
                data[pos]
            )));
        }
        if let Some(i) = (0..size).find(|&i| data[i * size + i] != 0.0) {
            return Err(TspError::invalid_input(format!(
                "diagonal entry ({i}, {i}) is not zero"
            )));
        }
        Ok(Self {
            data,
            size,
            labels: None,
        })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// One row of the matrix: distances from `from` to every location.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// City labels in index order, if the matrix was built from cities.
    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    /// Label of city `index`, if known.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(index))
            .map(String::as_str)
    }

    /// Index of the city with the given label.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.iter().position(|l| l == label))
    }

    /// Resolves a start selector to a matrix index.
    ///
    /// Returns [`TspError::UnknownCity`] for an unknown label or an index
    /// outside `0..size`.
    pub fn resolve(&self, start: &StartSpec) -> Result<usize> {
        match start {
            StartSpec::ByIndex(i) if *i < self.size => Ok(*i),
            StartSpec::ByLabel(label) => self
                .index_of(label)
                .ok_or_else(|| TspError::unknown_city(start.to_string())),
            StartSpec::ByIndex(_) => Err(TspError::unknown_city(format!(
                "{start} (matrix has {} cities)",
                self.size
            ))),
        }
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Equal distances go to the lowest index. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            match best {
                Some((b, bd)) if d > bd || (d == bd && c > b) => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |i: usize| -> String {
            match self.label(i) {
                Some(l) => l.chars().take(12).collect(),
                None => i.to_string(),
            }
        };

        write!(f, "{:>12} |", "")?;
        for j in 0..self.size {
            write!(f, " {:>12}", name(j))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(14 + 13 * self.size))?;
        for i in 0..self.size {
            write!(f, "{:>12} |", name(i))?;
            for j in 0..self.size {
                if i == j {
                    write!(f, " {:>12}", "-")?;
                } else {
                    write!(f, " {:>12.2}", self.get(i, j))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
