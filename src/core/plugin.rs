//! Core plugin for pawnmarch
//!
//! Resolves the board configuration (config file, then CLI overrides) and
//! inserts it as a resource during plugin build, so every later plugin can
//! read [`BoardConfig`] while constructing its own resources.
//!
//! # Plugin Order
//!
//! Recommended plugin order:
//! 1. [`bevy::DefaultPlugins`] - Core Bevy functionality (and logging)
//! 2. [`bevy_egui::EguiPlugin`] - UI framework
//! 3. [`CorePlugin`] - Configuration
//! 4. [`crate::march::MarchPlugin`] - Session logic
//! 5. Rendering plugins (BoardPlugin, PawnPlugin, CameraPlugin)
//! 6. [`crate::ui::HudPlugin`] - Overlay UI

use bevy::prelude::*;
use std::path::PathBuf;

use super::settings_persistence::load_board_config;
use super::BoardConfig;

/// Board parameters supplied on the command line
///
/// Each field, when present, overrides the corresponding value from the
/// config file (or the defaults).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Alternate config file location
    pub config_path: Option<PathBuf>,
    /// Override for [`BoardConfig::square_size`]
    pub square_size: Option<f32>,
    /// Override for [`BoardConfig::board_size`]
    pub board_size: Option<u8>,
}

/// Core plugin resolving and owning the board configuration
pub struct CorePlugin {
    pub overrides: ConfigOverrides,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let mut config = load_board_config(self.overrides.config_path.as_deref());

        if let Some(square_size) = self.overrides.square_size {
            config.square_size = square_size;
        }
        if let Some(board_size) = self.overrides.board_size {
            config.board_size = board_size;
        }
        if !config.is_valid() {
            warn!(
                "[CONFIG] Overridden board dimensions are non-positive ({:?}). Using defaults.",
                config
            );
            config = BoardConfig::default();
        }

        info!(
            "[CONFIG] Board: {}x{} cells, square size {}",
            config.board_size, config.board_size, config.square_size
        );

        app.insert_resource(config);
        app.register_type::<BoardConfig>();
    }
}
