//! March module - Pawn traversal logic
//!
//! Implements the one piece of real state-transition behavior in the scene:
//! a pawn snaking across the board in row-major order with wraparound,
//! leaving a trail of visited squares behind it.
//!
//! # Module Organization
//!
//! - `rules` - Pure traversal logic (coordinate lattice, advancement rule)
//! - `resources` - Session state (PawnState, Trail, StepCounter)
//! - `systems` - ECS systems (input triggers, advance execution)
//! - `components` - Entity markers (Pawn, TrailMarker)
//! - `events` - The AdvanceRequested message
//! - `plugin` - MarchPlugin registering everything
//!
//! # Control Flow
//!
//! Each advance trigger (pawn click, Space key, HUD button) writes an
//! [`AdvanceRequested`] message. The `advance_pawn` system drains the
//! buffer and, per message, applies one atomic step: record the current
//! position in the trail, compute the next position, move the pawn, bump
//! the counter. Visual systems react afterwards in the same frame.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;

// Re-export the main entry points
pub use events::AdvanceRequested;
pub use plugin::MarchPlugin;
pub use system_sets::MarchSystems;
