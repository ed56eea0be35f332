//! Scene camera with RTS-style controls
//!
//! WASD pans the camera along the XZ plane while keeping its viewing
//! angle; the scroll wheel adjusts height between zoom limits. Both use
//! lerp smoothing for fluid motion rather than instant updates.
//!
//! # Controls
//!
//! - **W / S**: Pan toward / away from the top of the board
//! - **A / D**: Strafe left / right
//! - **Mouse Wheel**: Zoom in / out (camera height)

use crate::march::MarchSystems;
use bevy::input::mouse::AccumulatedMouseScroll;
use bevy::prelude::*;

/// Component marking the scene camera as player-controllable
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct CameraController {
    /// Pan speed in units per second
    pub move_speed: f32,
    /// Lerp factor per frame for panning and zooming
    pub smoothing: f32,
    /// Height change per scroll-wheel dot
    pub zoom_speed: f32,
    /// Lowest camera height
    pub min_zoom: f32,
    /// Highest camera height
    pub max_zoom: f32,
    /// Height the zoom system is interpolating toward
    pub target_zoom: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            smoothing: 0.2,
            zoom_speed: 0.5,
            min_zoom: 1.5,
            max_zoom: 12.0,
            target_zoom: 4.5,
        }
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.5, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
        CameraController::default(),
        Name::new("Scene Camera"),
    ));
}

/// WASD panning on the XZ plane
///
/// Projects the camera's forward/right vectors onto the XZ plane so the
/// viewing angle stays fixed while panning, then lerps toward the target.
pub fn camera_movement_system(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut Transform, &CameraController)>,
) {
    for (mut transform, controller) in query.iter_mut() {
        let forward = transform.forward();
        let right = transform.right();
        let forward_xz = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
        let right_xz = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();

        let mut direction = Vec3::ZERO;
        if keyboard.pressed(KeyCode::KeyW) {
            direction += forward_xz;
        }
        if keyboard.pressed(KeyCode::KeyS) {
            direction -= forward_xz;
        }
        if keyboard.pressed(KeyCode::KeyD) {
            direction += right_xz;
        }
        if keyboard.pressed(KeyCode::KeyA) {
            direction -= right_xz;
        }

        // Normalize so diagonal panning is not faster
        direction = direction.normalize_or_zero();

        let velocity = direction * controller.move_speed * time.delta_secs();
        let target = transform.translation + velocity;

        let current_xz = Vec2::new(transform.translation.x, transform.translation.z);
        let target_xz = Vec2::new(target.x, target.z);
        let interpolated = current_xz.lerp(target_xz, controller.smoothing);

        transform.translation.x = interpolated.x;
        transform.translation.z = interpolated.y;
        // Height is owned by the zoom system
    }
}

/// Scroll-wheel zoom via camera height
pub fn camera_zoom_system(
    scroll: Res<AccumulatedMouseScroll>,
    mut query: Query<(&mut Transform, &mut CameraController)>,
) {
    for (mut transform, mut controller) in query.iter_mut() {
        if scroll.delta.y.abs() > f32::EPSILON {
            controller.target_zoom = (controller.target_zoom
                - scroll.delta.y * controller.zoom_speed)
                .clamp(controller.min_zoom, controller.max_zoom);
        }

        transform.translation.y = transform
            .translation
            .y
            .lerp(controller.target_zoom, controller.smoothing);
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraController>();
        app.add_systems(Startup, setup_camera);
        app.add_systems(
            Update,
            (camera_movement_system, camera_zoom_system).in_set(MarchSystems::Input),
        );
    }
}
