//! Error types.
//!
//! Every failure is detected synchronously by the call that receives the bad
//! data. Nothing is retried and no shared state is touched, so the caller can
//! fix the input and try again.

use thiserror::Error;

/// Errors returned by matrix construction, tour evaluation and solvers.
#[derive(Debug, Error)]
pub enum TspError {
    /// Malformed city set: empty, non-finite coordinates, duplicate labels,
    /// or an explicit matrix with bad shape or entries.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Malformed tour: wrong length, out-of-range or duplicate index.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A start city that is not part of the loaded set.
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// Result serialization failed.
    #[cfg(feature = "json")]
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }

    pub(crate) fn unknown_city(message: impl Into<String>) -> Self {
        Self::UnknownCity(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TspError::invalid_input("empty city list").to_string(),
            "invalid input: empty city list"
        );
        assert_eq!(
            TspError::invalid_tour("length 3, expected 4").to_string(),
            "invalid tour: length 3, expected 4"
        );
        assert_eq!(
            TspError::unknown_city("'Lima'").to_string(),
            "unknown city: 'Lima'"
        );
    }
}
