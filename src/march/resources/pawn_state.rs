//! Live pawn position resource

use crate::core::BoardConfig;
use crate::march::rules::{self, Coordinate};
use bevy::prelude::*;

/// Current position of the single live pawn
///
/// Exactly one instance, alive for the whole session. Mutated only with
/// the output of [`rules::advance`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PawnState {
    pub position: Coordinate,
}

impl FromWorld for PawnState {
    /// Starts at the board's top-left cell. A missing [`BoardConfig`]
    /// degrades to the default board rather than faulting.
    fn from_world(world: &mut World) -> Self {
        let board = world
            .get_resource::<BoardConfig>()
            .copied()
            .unwrap_or_default();
        Self {
            position: rules::initial_position(&board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pawn_state_initializes_at_top_left() {
        //! FromWorld places the pawn at the initial cell of the configured
        //! board
        let mut world = World::new();
        world.insert_resource(BoardConfig::default());
        let state = PawnState::from_world(&mut world);
        assert_eq!(state.position, Coordinate::new(-2.0, 1.5));
    }

    #[test]
    fn test_pawn_state_defaults_board_when_config_missing() {
        //! No BoardConfig resource: fall back to the default board instead
        //! of faulting
        let mut world = World::new();
        let state = PawnState::from_world(&mut world);
        assert_eq!(state.position, Coordinate::new(-2.0, 1.5));
    }
}
