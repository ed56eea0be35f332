//! Pawn rendering - primitive-mesh silhouette and position sync
//!
//! The pawn is assembled from three primitives parented under one entity:
//! a conical-frustum base, a conical-frustum body, and a sphere head. The
//! same silhouette (via [`PawnMeshes`]) is reused for the ghost markers.
//! Child meshes carry `PointerInteraction` so clicks bubble up to the
//! parent's observer.

use crate::march::components::Pawn;
use crate::march::resources::PawnState;
use crate::march::systems::on_pawn_click;
use crate::march::MarchSystems;
use crate::rendering::trail_markers::spawn_trail_markers;
use crate::rendering::utils::SceneMaterials;
use bevy::picking::pointer::PointerInteraction;
use bevy::prelude::*;

/// Mesh handles for the pawn silhouette, shared by the live pawn and the
/// ghosts
#[derive(Resource)]
pub struct PawnMeshes {
    base: Handle<Mesh>,
    body: Handle<Mesh>,
    head: Handle<Mesh>,
}

impl FromWorld for PawnMeshes {
    fn from_world(world: &mut World) -> Self {
        let mut meshes = world
            .get_resource_mut::<Assets<Mesh>>()
            .expect("Assets<Mesh> should be initialized before PawnMeshes");
        PawnMeshes {
            base: meshes.add(ConicalFrustum {
                radius_top: 0.15,
                radius_bottom: 0.2,
                height: 0.1,
            }),
            body: meshes.add(ConicalFrustum {
                radius_top: 0.1,
                radius_bottom: 0.15,
                height: 0.4,
            }),
            head: meshes.add(Sphere::new(0.15)),
        }
    }
}

impl PawnMeshes {
    /// (mesh, local y offset) for each part, bottom to top
    pub fn parts(&self) -> [(Handle<Mesh>, f32); 3] {
        [
            (self.base.clone(), 0.0),
            (self.body.clone(), 0.2),
            (self.head.clone(), 0.5),
        ]
    }
}

pub(crate) fn spawn_pawn(
    mut commands: Commands,
    pawn_meshes: Res<PawnMeshes>,
    materials: Res<SceneMaterials>,
    pawn_state: Res<PawnState>,
) {
    commands
        .spawn((
            Transform::from_xyz(pawn_state.position.x, 0.0, pawn_state.position.z),
            Visibility::default(),
            Pawn,
            Name::new("Pawn"),
        ))
        .observe(on_pawn_click)
        .with_children(|parent| {
            for (mesh, y) in pawn_meshes.parts() {
                parent.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(materials.pawn.clone()),
                    Transform::from_xyz(0.0, y, 0.0),
                    PointerInteraction::default(),
                ));
            }
        });

    info!(
        "[PAWN] Spawned at ({:.2}, {:.2})",
        pawn_state.position.x, pawn_state.position.z
    );
}

/// Keeps the pawn entity's transform in sync with the session position
pub fn sync_pawn_transform(
    pawn_state: Res<PawnState>,
    mut pawns: Query<&mut Transform, With<Pawn>>,
) {
    if !pawn_state.is_changed() {
        return;
    }
    for mut transform in pawns.iter_mut() {
        transform.translation.x = pawn_state.position.x;
        transform.translation.z = pawn_state.position.z;
    }
}

pub struct PawnPlugin;

impl Plugin for PawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PawnMeshes>();
        app.add_systems(Startup, spawn_pawn);
        app.add_systems(
            Update,
            (sync_pawn_transform, spawn_trail_markers).in_set(MarchSystems::Visual),
        );
    }
}
