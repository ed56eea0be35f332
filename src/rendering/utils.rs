//! Rendering utilities - shared materials and the board-square component

use bevy::prelude::*;

/// Identifies a board cell by its grid indices
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSquare {
    pub row: u8,
    pub col: u8,
}

impl BoardSquare {
    /// True for the lighter (tan) squares of the checkerboard
    ///
    /// Cells with an even `row + col` are light, giving the traditional
    /// alternating pattern.
    pub fn is_light(&self) -> bool {
        (self.row + self.col).is_multiple_of(2)
    }
}

/// Material handles shared across the scene's meshes
///
/// Created once via `FromWorld` so every square and pawn part reuses the
/// same handles.
#[derive(Resource)]
pub struct SceneMaterials {
    /// Light (tan) board squares
    pub light_square: Handle<StandardMaterial>,
    /// Dark (saddle brown) board squares
    pub dark_square: Handle<StandardMaterial>,
    /// The live pawn
    pub pawn: Handle<StandardMaterial>,
    /// Ghost trail markers
    pub ghost: Handle<StandardMaterial>,
}

impl FromWorld for SceneMaterials {
    fn from_world(world: &mut World) -> Self {
        let mut materials = world
            .get_resource_mut::<Assets<StandardMaterial>>()
            .expect("Assets<StandardMaterial> should be initialized before SceneMaterials");
        SceneMaterials {
            light_square: materials.add(StandardMaterial {
                base_color: Srgba::hex("D2B48C")
                    .expect("hardcoded hex color 'D2B48C' is valid")
                    .into(),
                perceptual_roughness: 0.9,
                ..default()
            }),
            dark_square: materials.add(StandardMaterial {
                base_color: Srgba::hex("8B4513")
                    .expect("hardcoded hex color '8B4513' is valid")
                    .into(),
                perceptual_roughness: 0.9,
                ..default()
            }),
            pawn: materials.add(Color::WHITE),
            ghost: materials.add(StandardMaterial {
                base_color: Srgba::hex("FF0000")
                    .expect("hardcoded hex color 'FF0000' is valid")
                    .into(),
                ..default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_square_colors() {
        //! (0,0) is light in this board's coloring; its horizontal
        //! neighbor is dark
        assert!(BoardSquare { row: 0, col: 0 }.is_light());
        assert!(!BoardSquare { row: 0, col: 1 }.is_light());
        assert!(BoardSquare { row: 7, col: 7 }.is_light());
    }

    #[test]
    fn test_checkerboard_pattern_alternates() {
        //! Adjacent squares (horizontally or vertically) always have
        //! opposite colors
        for row in 0..8u8 {
            for col in 0..7u8 {
                let a = BoardSquare { row, col };
                let b = BoardSquare { row, col: col + 1 };
                assert_ne!(a.is_light(), b.is_light());
            }
        }
        for row in 0..7u8 {
            for col in 0..8u8 {
                let a = BoardSquare { row, col };
                let b = BoardSquare { row: row + 1, col };
                assert_ne!(a.is_light(), b.is_light());
            }
        }
    }

    #[test]
    fn test_diagonal_squares_share_color() {
        let a = BoardSquare { row: 0, col: 0 };
        let b = BoardSquare { row: 2, col: 2 };
        assert_eq!(a.is_light(), b.is_light());
    }
}
