//! Tour cost evaluation.

mod tour_cost;

pub use tour_cost::tour_cost;

pub(crate) use tour_cost::cycle_length;
