use bevy::prelude::*;

/// Request to advance the pawn by one square
///
/// Written by the pawn click observer, the keyboard system, and the HUD
/// button; drained by [`crate::march::systems::advance_pawn`]. Each
/// message is exactly one step.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct AdvanceRequested;
