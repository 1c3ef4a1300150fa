//! # acs-tsp
//!
//! Ant Colony System metaheuristic for the symmetric Traveling Salesman
//! Problem, with instance loading, tour evaluation, and a seedable
//! deterministic solver.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Solution)
//! - [`distance`] — Distance and heuristic desirability matrices
//! - [`tsp`] — TSPLIB-style coordinate file loading
//! - [`constructive`] — Uniform random tour construction
//! - [`evaluation`] — Closed-tour cost evaluation
//! - [`colony`] — The ACS engine (configuration, pheromone field, ants)
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use acs_tsp::colony::{AcsConfig, Colony};
//! use acs_tsp::distance::{DistanceMatrix, HeuristicMatrix};
//!
//! let dm = DistanceMatrix::from_points(&[
//!     (0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (0.0, 4.0),
//! ]);
//! let eta = HeuristicMatrix::reciprocal(&dm);
//! let config = AcsConfig {
//!     num_ants: 4,
//!     max_iterations: 25,
//!     ..AcsConfig::default()
//! };
//!
//! let mut colony = Colony::seeded(config, dm, eta, 7).unwrap();
//! let best = colony.run();
//! println!("{best}");
//! assert!(best.is_permutation());
//! ```

pub mod colony;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod tsp;
