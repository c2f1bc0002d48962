//! Start-city selection.

use serde::{Deserialize, Serialize};

/// Where a constructive heuristic begins its tour.
///
/// Resolved to a matrix index once, at the solver entry point.
///
/// # Examples
///
/// ```
/// use tsp_compare::models::StartSpec;
///
/// assert_eq!(StartSpec::from(2), StartSpec::ByIndex(2));
/// assert_eq!(StartSpec::from("Moscu"), StartSpec::ByLabel("Moscu".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartSpec {
    /// Zero-based matrix index.
    ByIndex(usize),
    /// City label as given when the matrix was built.
    ByLabel(String),
}

impl Default for StartSpec {
    fn default() -> Self {
        StartSpec::ByIndex(0)
    }
}

impl From<usize> for StartSpec {
    fn from(index: usize) -> Self {
        StartSpec::ByIndex(index)
    }
}

impl From<&str> for StartSpec {
    fn from(label: &str) -> Self {
        StartSpec::ByLabel(label.to_string())
    }
}

impl From<String> for StartSpec {
    fn from(label: String) -> Self {
        StartSpec::ByLabel(label)
    }
}

impl std::fmt::Display for StartSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartSpec::ByIndex(i) => write!(f, "#{i}"),
            StartSpec::ByLabel(label) => write!(f, "'{label}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_city() {
        assert_eq!(StartSpec::default(), StartSpec::ByIndex(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(StartSpec::ByIndex(3).to_string(), "#3");
        assert_eq!(StartSpec::from("Orlando".to_string()).to_string(), "'Orlando'");
    }
}
