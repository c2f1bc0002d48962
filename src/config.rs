//! Solver configuration.
//!
//! Plain serde structs with defaults, so a host can load them from its own
//! configuration file or build them with the `with_*` methods.

use serde::{Deserialize, Serialize};

use crate::distance::Metric;

/// Settings for the exhaustive search.
///
/// # Examples
///
/// ```
/// use tsp_compare::config::ExhaustiveConfig;
///
/// let config = ExhaustiveConfig::default()
///     .with_record_trace(true)
///     .with_sample_capacity(64);
/// assert!(config.record_trace);
/// assert_eq!(config.sample_capacity, 64);
/// assert_eq!(config.progress_interval, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhaustiveConfig {
    /// Keep a [`SearchTrace`](crate::exact::SearchTrace) of evaluated tours.
    pub record_trace: bool,
    /// Initial sampling interval of the trace, in iterations.
    pub sample_every: u64,
    /// Maximum number of sampled tours held by the trace.
    pub sample_capacity: usize,
    /// Emit a progress log line every this many iterations; 0 disables it.
    pub progress_interval: u64,
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            record_trace: false,
            sample_every: 1,
            sample_capacity: 1000,
            progress_interval: 500,
        }
    }
}

impl ExhaustiveConfig {
    /// Enables or disables the trace.
    pub fn with_record_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Sets the initial sampling interval (at least 1).
    pub fn with_sample_every(mut self, every: u64) -> Self {
        self.sample_every = every.max(1);
        self
    }

    /// Sets the sample buffer capacity; 0 keeps improvements only.
    pub fn with_sample_capacity(mut self, capacity: usize) -> Self {
        self.sample_capacity = capacity;
        self
    }

    /// Sets the progress log interval; 0 disables progress lines.
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }
}

/// Top-level settings shared by a comparison run.
///
/// # Examples
///
/// ```
/// use tsp_compare::config::SolverConfig;
/// use tsp_compare::distance::Metric;
///
/// let config = SolverConfig::default().with_metric(Metric::Haversine);
/// assert_eq!(config.metric, Metric::Haversine);
/// assert!(!config.nearest_neighbor_trace);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Metric used to build the distance matrix.
    pub metric: Metric,
    /// Exhaustive search settings.
    pub exhaustive: ExhaustiveConfig,
    /// Record per-step decisions of the nearest-neighbor construction.
    pub nearest_neighbor_trace: bool,
}

impl SolverConfig {
    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the exhaustive search settings.
    pub fn with_exhaustive(mut self, exhaustive: ExhaustiveConfig) -> Self {
        self.exhaustive = exhaustive;
        self
    }

    /// Enables or disables the nearest-neighbor step trace.
    pub fn with_nearest_neighbor_trace(mut self, record: bool) -> Self {
        self.nearest_neighbor_trace = record;
        self
    }

    /// Parses a configuration from JSON; missing fields take their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(text: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
