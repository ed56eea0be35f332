//! Grid advancement rule
//!
//! Row-major sweep with wraparound: the pawn steps one square in +x until
//! it passes the right edge, drops one row (-z) back at the left edge, and
//! wraps from the bottom row to the top-left cell. Starting from
//! [`initial_position`], repeated [`advance`] calls visit every cell
//! exactly once per `board_size^2` steps.

use crate::core::BoardConfig;

use super::Coordinate;

/// The top-left cell, where the traversal starts and wraps back to
pub fn initial_position(board: &BoardConfig) -> Coordinate {
    let half = board.half_extent();
    Coordinate::new(-half, half - board.square_size)
}

/// Next position in the traversal
///
/// Total over its inputs; assumes `current` is a value this function
/// previously produced or [`initial_position`]. The bottom-edge check runs
/// against the already row-advanced z, so the final cell wraps row and
/// board in a single call.
pub fn advance(current: Coordinate, board: &BoardConfig) -> Coordinate {
    let half = board.half_extent();

    let mut x = current.x + board.square_size;
    let mut z = current.z;

    // Right edge: continue at the left edge of the next row down (-z).
    if x >= half {
        x = -half;
        z -= board.square_size;
    }

    // Bottom edge: wrap back to the top row.
    if z < -half {
        x = -half;
        z = half - board.square_size;
    }

    Coordinate::new(x, z)
}
