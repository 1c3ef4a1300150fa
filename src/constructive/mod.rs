//! Constructive procedures for initial tours.
//!
//! - [`random_tour`] — Uniform random permutation via Fisher-Yates, O(n)

mod random_tour;

pub use random_tour::random_tour;
