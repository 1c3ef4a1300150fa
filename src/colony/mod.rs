//! Ant Colony System solver.
//!
//! The engine lives in [`Colony`]; the supporting pieces are the
//! run parameters ([`AcsConfig`]), the trail matrix ([`PheromoneField`]),
//! the per-ant tour builder ([`Ant`]) with its unvisited-candidate
//! bookkeeping ([`CandidateSet`]), and roulette-wheel selection.

mod ant;
mod candidates;
mod config;
mod engine;
mod pheromone;
mod selection;

pub use ant::Ant;
pub use candidates::CandidateSet;
pub use config::AcsConfig;
pub use engine::Colony;
pub use pheromone::PheromoneField;
pub use selection::roulette_pick;
