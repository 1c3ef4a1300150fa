//! Tour cost evaluation.
//!
//! The pure closed-tour cost function used for the initial random tour
//! and mirrored by the ants' incremental cost accumulation.

mod cost;

pub use cost::tour_cost;
