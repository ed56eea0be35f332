//! Step counter resource

use bevy::prelude::*;

/// Number of advance steps taken this session
///
/// Purely observational: rendered by the HUD, never read by the movement
/// logic. Incremented by exactly one per advance, in lockstep with the
/// trail.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct StepCounter {
    count: u64,
}

impl StepCounter {
    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}
