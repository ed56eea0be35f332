//! March-related components

use bevy::prelude::*;

/// Marker for the single live pawn entity
#[derive(Component, Debug, Clone, Copy)]
pub struct Pawn;

/// Ghost pawn marking a previously visited square
///
/// `index` is the entry's position in the trail; it never changes once
/// spawned.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailMarker {
    pub index: usize,
}
