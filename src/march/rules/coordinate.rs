//! Board-plane coordinates

use crate::core::BoardConfig;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// A position on the board's horizontal plane (x, z axes), in world units
///
/// Immutable value type: systems replace it wholesale, never mutate it in
/// place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, Reflect)]
pub struct Coordinate {
    pub x: f32,
    pub z: f32,
}

impl Coordinate {
    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// World-space center of the cell at grid indices (row, col)
    ///
    /// `index * square_size - half_extent` on each axis; rows run along z,
    /// columns along x.
    pub fn cell_center(board: &BoardConfig, row: u8, col: u8) -> Self {
        let half = board.half_extent();
        Self::new(
            col as f32 * board.square_size - half,
            row as f32 * board.square_size - half,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_center_origin_cell() {
        //! Cell (0, 0) sits at the board's -x/-z corner
        let board = BoardConfig::default();
        assert_eq!(
            Coordinate::cell_center(&board, 0, 0),
            Coordinate::new(-2.0, -2.0)
        );
    }

    #[test]
    fn test_cell_center_spacing_is_one_square() {
        //! Neighboring columns are exactly one square apart
        let board = BoardConfig::default();
        let a = Coordinate::cell_center(&board, 3, 2);
        let b = Coordinate::cell_center(&board, 3, 3);
        assert_eq!(b.x - a.x, board.square_size);
        assert_eq!(b.z, a.z);
    }
}
