//! March plugin - session resources and systems
//!
//! Registers the session state, the advance message, and the input and
//! execution systems. Rendering plugins hook their visual systems into
//! [`MarchSystems::Visual`], which this plugin orders after execution.
//!
//! # Plugin Dependencies
//!
//! [`crate::core::CorePlugin`] must be added first: [`PawnState`]'s
//! `FromWorld` reads [`crate::core::BoardConfig`] to place the pawn on the
//! configured board.

use super::events::AdvanceRequested;
use super::resources::{PawnState, StepCounter, Trail};
use super::rules::Coordinate;
use super::system_sets::MarchSystems;
use super::systems::{advance_pawn, keyboard_advance_input};
use bevy::prelude::*;

/// Plugin owning the march session
pub struct MarchPlugin;

impl Plugin for MarchPlugin {
    fn build(&self, app: &mut App) {
        // Session state. PawnState::from_world reads BoardConfig here.
        app.init_resource::<PawnState>()
            .init_resource::<Trail>()
            .init_resource::<StepCounter>();

        // Register types for reflection (needed for inspector tooling)
        app.register_type::<Coordinate>()
            .register_type::<PawnState>()
            .register_type::<Trail>()
            .register_type::<StepCounter>();

        app.add_message::<AdvanceRequested>();

        // Input -> Execution -> Visual, every frame
        app.configure_sets(
            Update,
            (
                MarchSystems::Input,
                MarchSystems::Execution,
                MarchSystems::Visual,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                keyboard_advance_input.in_set(MarchSystems::Input),
                advance_pawn.in_set(MarchSystems::Execution),
            ),
        );
    }
}
