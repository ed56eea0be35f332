use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;
use std::path::PathBuf;

use pawnmarch::core::{ConfigOverrides, CorePlugin, WindowConfig};
use pawnmarch::march::MarchPlugin;
use pawnmarch::rendering::{BoardPlugin, CameraPlugin, PawnPlugin};
use pawnmarch::ui::HudPlugin;

/// Interactive 3D scene: a pawn snaking across a chessboard
///
/// Board dimensions come from the config file; flags override it.
#[derive(Parser, Debug)]
#[command(name = "pawnmarch", version, about)]
struct Cli {
    /// Alternate board config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Width of one board cell in world units
    #[arg(long)]
    square_size: Option<f32>,

    /// Number of cells per board side
    #[arg(long)]
    board_size: Option<u8>,
}

fn main() {
    let cli = Cli::parse();
    let window_config = WindowConfig::default();

    App::new()
        // Core plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window_config.to_window()),
            ..default()
        }))
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
            ..default()
        })
        .add_plugins(MeshPickingPlugin)
        // Configuration (must precede the scene plugins)
        .add_plugins(CorePlugin {
            overrides: ConfigOverrides {
                config_path: cli.config,
                square_size: cli.square_size,
                board_size: cli.board_size,
            },
        })
        // Scene
        .add_plugins(MarchPlugin)
        .add_plugins(BoardPlugin)
        .add_plugins(PawnPlugin)
        .add_plugins(CameraPlugin)
        .add_plugins(HudPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Lighting rig: soft ambient fill plus one directional key light
fn setup_scene(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 150.0,
        ..default()
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Key Light"),
    ));
}
