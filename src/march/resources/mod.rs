//! Session state resources
//!
//! Resources are ECS singletons owned by the `World`; together they form
//! the march session:
//!
//! - [`PawnState`] - Current position of the single live pawn
//! - [`Trail`] - Append-only record of visited squares
//! - [`StepCounter`] - Number of advances taken
//!
//! All three are mutated only by [`crate::march::systems::advance_pawn`],
//! which applies record + move + increment as one step, keeping the
//! `trail.len() == steps` invariant.

pub mod pawn_state;
pub mod steps;
pub mod trail;

pub use pawn_state::PawnState;
pub use steps::StepCounter;
pub use trail::Trail;
