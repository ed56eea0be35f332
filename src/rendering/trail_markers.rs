//! Ghost trail rendering
//!
//! One red ghost pawn per trail entry, spawned incrementally as the trail
//! grows. Existing ghosts are never despawned, moved, or restyled, so each
//! trail entry keeps a stable entity for its whole lifetime.

use crate::march::components::TrailMarker;
use crate::march::resources::Trail;
use crate::rendering::pawn::PawnMeshes;
use crate::rendering::utils::SceneMaterials;
use bevy::prelude::*;

/// System spawning ghost pawns for trail entries that have no marker yet
///
/// Compares the number of existing markers with the trail length and
/// spawns the missing tail. Handles several new entries in one frame.
pub fn spawn_trail_markers(
    mut commands: Commands,
    trail: Res<Trail>,
    pawn_meshes: Res<PawnMeshes>,
    materials: Res<SceneMaterials>,
    existing: Query<(), With<TrailMarker>>,
) {
    if !trail.is_changed() {
        return;
    }

    let spawned = existing.iter().count();
    for (index, position) in trail.positions().iter().enumerate().skip(spawned) {
        commands
            .spawn((
                Transform::from_xyz(position.x, 0.0, position.z),
                Visibility::default(),
                TrailMarker { index },
                Name::new(format!("Ghost {index}")),
            ))
            .with_children(|parent| {
                for (mesh, y) in pawn_meshes.parts() {
                    parent.spawn((
                        Mesh3d(mesh),
                        MeshMaterial3d(materials.ghost.clone()),
                        Transform::from_xyz(0.0, y, 0.0),
                    ));
                }
            });

        debug!(
            "[TRAIL] Ghost {} at ({:.2}, {:.2})",
            index, position.x, position.z
        );
    }
}
