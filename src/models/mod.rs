//! Domain model types for the ACS solver.
//!
//! Provides the solution record: a closed tour over the graph's vertices
//! together with its total cost.

mod solution;

pub use solution::Solution;
