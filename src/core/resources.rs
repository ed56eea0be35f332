//! Core configuration resources
//!
//! [`BoardConfig`] is the single source of truth for board geometry. Every
//! world-space position in the scene derives from it: cell centers, the
//! pawn's initial placement, and the wrap thresholds of the advancement
//! rule. It is loaded once at startup (config file, then CLI overrides) and
//! never mutated afterwards.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Board geometry parameters
///
/// The board is a `board_size` x `board_size` grid of square cells, each
/// `square_size` world units wide, laid out on the XZ plane. A cell's
/// center is at `index * square_size - half_extent` on each axis.
///
/// Defaults match the classic scene: an 8x8 board of 0.5-unit squares.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct BoardConfig {
    /// Width of one board cell in world units
    pub square_size: f32,
    /// Number of cells per board side
    pub board_size: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            square_size: 0.5,
            board_size: 8,
        }
    }
}

impl BoardConfig {
    /// Half the board's world-space extent: `board_size * square_size / 2`.
    ///
    /// The advancement rule treats `x >= half_extent` as the right edge and
    /// `z < -half_extent` as the bottom edge.
    pub fn half_extent(&self) -> f32 {
        self.board_size as f32 * self.square_size / 2.0
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> u32 {
        self.board_size as u32 * self.board_size as u32
    }

    /// Both dimensions are positive. Non-positive values would collapse the
    /// traversal lattice, so loaders reject such configs and fall back to
    /// defaults.
    pub fn is_valid(&self) -> bool {
        self.square_size > 0.0 && self.board_size > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_config() {
        //! Verifies the default 8x8 board of 0.5-unit squares
        let config = BoardConfig::default();
        assert_eq!(config.square_size, 0.5);
        assert_eq!(config.board_size, 8);
        assert!(config.is_valid());
    }

    #[test]
    fn test_half_extent() {
        //! half_extent is board_size * square_size / 2
        let config = BoardConfig::default();
        assert_eq!(config.half_extent(), 2.0);

        let small = BoardConfig {
            square_size: 1.0,
            board_size: 4,
        };
        assert_eq!(small.half_extent(), 2.0);
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(BoardConfig::default().cell_count(), 64);
    }

    #[test]
    fn test_invalid_dimensions_are_rejected() {
        //! Zero or negative dimensions fail validation
        let zero_cells = BoardConfig {
            square_size: 0.5,
            board_size: 0,
        };
        assert!(!zero_cells.is_valid());

        let flat = BoardConfig {
            square_size: 0.0,
            board_size: 8,
        };
        assert!(!flat.is_valid());
    }
}
