//! Tour type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// A cyclic visiting order over all cities.
///
/// Holds `n` distinct indices in `[0, n)`. The edge from the last city back
/// to the first is implied.
///
/// # Examples
///
/// ```
/// use tsp_compare::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 3], 4).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour.start(), Some(0));
/// assert_eq!(tour.rotated_to(1).as_slice(), &[1, 3, 0, 2]);
///
/// assert!(Tour::new(vec![0, 1, 1], 3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Validates `order` as a permutation of `0..n`.
    ///
    /// Returns [`TspError::InvalidTour`] on wrong length, an out-of-range
    /// index, or a repeated index.
    pub fn new(order: Vec<usize>, n: usize) -> Result<Self> {
        validate(&order, n)?;
        Ok(Self { order })
    }

    /// Wraps an order the caller built as a permutation.
    pub(crate) fn from_order(order: Vec<usize>) -> Self {
        debug_assert!(validate(&order, order.len()).is_ok());
        Self { order }
    }

    /// City indices in visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for a tour over zero cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// First city visited.
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Same cycle, listed from `city` onwards.
    ///
    /// Returns an unchanged copy if `city` is not in the tour.
    pub fn rotated_to(&self, city: usize) -> Tour {
        let Some(pos) = self.order.iter().position(|&c| c == city) else {
            return self.clone();
        };
        let mut order = Vec::with_capacity(self.order.len());
        order.extend_from_slice(&self.order[pos..]);
        order.extend_from_slice(&self.order[..pos]);
        Tour { order }
    }

    /// Same cycle, traversed in the opposite direction.
    pub fn reversed(&self) -> Tour {
        let mut order = self.order.clone();
        order.reverse();
        Tour { order }
    }

    /// Consumes the tour and returns its indices.
    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.order
    }
}

/// Checks that `order` is a permutation of `0..n`.
pub(crate) fn validate(order: &[usize], n: usize) -> Result<()> {
    if order.len() != n {
        return Err(TspError::invalid_tour(format!(
            "length {}, expected {n}",
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for &city in order {
        if city >= n {
            return Err(TspError::invalid_tour(format!(
                "index {city} out of range for {n} cities"
            )));
        }
        if seen[city] {
            return Err(TspError::invalid_tour(format!("index {city} repeated")));
        }
        seen[city] = true;
    }
    Ok(())
}
