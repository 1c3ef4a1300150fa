//! Distance and heuristic desirability matrices.
//!
//! Provides the two immutable inputs of a solver run: travel costs and
//! per-edge desirability (conventionally reciprocal distance).

mod heuristic;
mod matrix;

pub use heuristic::HeuristicMatrix;
pub use matrix::DistanceMatrix;
