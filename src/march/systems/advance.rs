//! Advance execution system

use crate::core::BoardConfig;
use crate::march::events::AdvanceRequested;
use crate::march::resources::{PawnState, StepCounter, Trail};
use crate::march::rules;
use bevy::prelude::*;

/// System applying buffered advance requests to the session state
///
/// Per request, one step: record the square being left in the trail, move
/// the pawn to the next square, bump the counter. The three resource
/// writes happen inside a single system invocation, so the step is atomic
/// with respect to every other system and `trail.len() == steps` holds
/// whenever anything else runs.
pub fn advance_pawn(
    mut requests: MessageReader<AdvanceRequested>,
    board: Res<BoardConfig>,
    mut pawn: ResMut<PawnState>,
    mut trail: ResMut<Trail>,
    mut steps: ResMut<StepCounter>,
) {
    for _ in requests.read() {
        let current = pawn.position;
        trail.record(current);
        pawn.position = rules::advance(current, &board);
        steps.increment();

        info!(
            "[MARCH] Step {}: ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            steps.count(),
            current.x,
            current.z,
            pawn.position.x,
            pawn.position.z
        );
    }
}
