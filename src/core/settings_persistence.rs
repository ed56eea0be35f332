//! Board configuration persistence
//!
//! Loads [`BoardConfig`] from a JSON file in the user's configuration
//! directory. Load failures never interrupt startup: an absent, unreadable,
//! malformed, or out-of-range config falls back to the defaults with a
//! warning.

use crate::core::error::CoreResult;
use crate::core::BoardConfig;
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Config filename
const CONFIG_FILENAME: &str = "board.json";

/// Helper to resolve the default config file path
///
/// Returns a path to `board.json` in the user's configuration directory,
/// e.g. `~/.config/pawnmarch/board.json`. Falls back to a local
/// `board.json` if the system config dir cannot be found.
fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "pawnmarch", "pawnmarch") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}

/// Read and parse a board config file
fn read_board_config(path: &Path) -> CoreResult<BoardConfig> {
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str::<BoardConfig>(&contents)?;
    Ok(config)
}

/// Load the board configuration, substituting defaults on any failure
///
/// `path` overrides the default config location (used by the `--config`
/// CLI flag). Missing file, unparseable contents, and non-positive
/// dimensions all degrade to [`BoardConfig::default`] without propagating
/// a fault.
pub fn load_board_config(path: Option<&Path>) -> BoardConfig {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    if !path.exists() {
        info!("[CONFIG] No board config at {:?}. Using defaults.", path);
        return BoardConfig::default();
    }

    match read_board_config(&path) {
        Ok(config) if config.is_valid() => {
            info!("[CONFIG] Loaded board config from {:?}", path);
            config
        }
        Ok(config) => {
            warn!(
                "[CONFIG] Board config at {:?} has non-positive dimensions ({:?}). Using defaults.",
                path, config
            );
            BoardConfig::default()
        }
        Err(e) => {
            warn!(
                "[CONFIG] Failed to load board config from {:?}: {}. Using defaults.",
                path, e
            );
            BoardConfig::default()
        }
    }
}
