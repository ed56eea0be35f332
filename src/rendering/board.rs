//! Board creation and rendering
//!
//! Batch-spawns the checkerboard: all squares are collected into a Vec
//! first and spawned in one pass rather than issuing `board_size^2`
//! interleaved spawn calls.

use crate::core::BoardConfig;
use crate::march::rules::Coordinate;
use crate::rendering::utils::{BoardSquare, SceneMaterials};
use bevy::prelude::*;

/// Board surface sits below piece level, like the classic scene
const BOARD_SURFACE_Y: f32 = -0.3;

/// Thickness of each square slab
const BOARD_THICKNESS: f32 = 0.1;

pub(crate) fn create_board(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<SceneMaterials>,
    board: Res<BoardConfig>,
) {
    let square_mesh = meshes.add(Cuboid::new(
        board.square_size,
        BOARD_THICKNESS,
        board.square_size,
    ));

    let board = *board;
    let squares: Vec<_> = (0..board.board_size)
        .flat_map(|row| {
            // Clone handles per row to share across the inner closure
            let light = materials.light_square.clone();
            let dark = materials.dark_square.clone();
            let mesh = square_mesh.clone();

            (0..board.board_size).map(move |col| {
                let square = BoardSquare { row, col };
                let material = if square.is_light() {
                    light.clone()
                } else {
                    dark.clone()
                };
                let center = Coordinate::cell_center(&board, row, col);

                (
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material),
                    Transform::from_translation(Vec3::new(center.x, BOARD_SURFACE_Y, center.z)),
                    square,
                    Name::new(format!("Square r{}c{}", row, col)),
                )
            })
        })
        .collect();

    let count = squares.len();
    for square_bundle in squares {
        commands.spawn(square_bundle);
    }

    info!("[BOARD] Spawned {} squares", count);
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneMaterials>();
        app.add_systems(Startup, create_board);
    }
}
