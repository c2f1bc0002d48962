//! Domain model types for the travelling-salesman problem.
//!
//! Cities with coordinates, tours as validated permutations, the start-city
//! selector, and the result records produced by the solvers.

mod city;
mod result;
mod start;
mod tour;

pub use city::{City, Coord};
pub use result::{
    ConstructionStep, EarlyStop, ExhaustiveResult, MultiStartResult, NearestNeighborResult,
    SearchProgress, StartOutcome,
};
pub use start::StartSpec;
pub use tour::Tour;

pub(crate) use tour::validate as validate_tour;
