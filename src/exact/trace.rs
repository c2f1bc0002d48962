//! Bounded record of the tours an exhaustive search evaluated.

use serde::{Deserialize, Serialize};

use crate::models::Tour;

/// One evaluated tour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// 1-based position of the tour in search order.
    pub iteration: u64,
    /// The tour evaluated.
    pub tour: Tour,
    /// Its cyclic length.
    pub cost: f64,
    /// Whether it replaced the incumbent.
    pub improved: bool,
}

/// Improving tours plus an evenly spread, capped sample of all tours.
///
/// Every tour that beats the incumbent is kept. Other tours are sampled
/// every `stride` iterations; when the sample buffer exceeds its capacity,
/// every other sample is dropped and the stride doubles, so memory stays
/// bounded while the sample keeps covering the whole run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTrace {
    improvements: Vec<TraceEntry>,
    samples: Vec<TraceEntry>,
    stride: u64,
    capacity: usize,
}

impl SearchTrace {
    pub(crate) fn new(stride: u64, capacity: usize) -> Self {
        Self {
            improvements: Vec::new(),
            samples: Vec::with_capacity(capacity.min(4096)),
            stride: stride.max(1),
            capacity,
        }
    }

    pub(crate) fn record(&mut self, iteration: u64, tour: &[usize], cost: f64, improved: bool) {
        let sampled = self.capacity > 0 && (iteration - 1) % self.stride == 0;
        if !improved && !sampled {
            return;
        }
        let entry = TraceEntry {
            iteration,
            tour: Tour::from_order(tour.to_vec()),
            cost,
            improved,
        };
        if sampled {
            self.samples.push(entry.clone());
            if self.samples.len() > self.capacity {
                self.decimate();
            }
        }
        if improved {
            self.improvements.push(entry);
        }
    }

    fn decimate(&mut self) {
        let stride = self.stride;
        self.samples.retain(|e| ((e.iteration - 1) / stride) % 2 == 0);
        self.stride = stride.saturating_mul(2);
        log::trace!(
            "trace sample buffer full, stride now {} ({} samples kept)",
            self.stride,
            self.samples.len()
        );
    }

    /// Tours that improved the incumbent, in search order.
    pub fn improvements(&self) -> &[TraceEntry] {
        &self.improvements
    }

    /// Periodic sample of evaluated tours, in search order.
    pub fn samples(&self) -> &[TraceEntry] {
        &self.samples
    }

    /// Current sampling interval in iterations.
    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Maximum number of samples retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `(iteration, best cost so far)` at every improvement.
    pub fn convergence(&self) -> Vec<(u64, f64)> {
        self.improvements
            .iter()
            .map(|e| (e.iteration, e.cost))
            .collect()
    }
}
