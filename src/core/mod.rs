//! Core module - Application infrastructure and configuration
//!
//! Provides the foundational configuration layer for the pawnmarch scene:
//!
//! - [`CorePlugin`] - Loads the board configuration (config file + CLI
//!   overrides) and inserts it into the app before any scene plugin runs
//! - [`BoardConfig`] - Board geometry parameters (square size, cell count)
//! - [`WindowConfig`] - Primary window settings
//! - [`CoreError`] - Error taxonomy for config I/O and parsing
//!
//! # Plugin Order
//!
//! [`CorePlugin`] must be added before [`crate::march::MarchPlugin`] and the
//! rendering plugins: they read [`BoardConfig`] while building their own
//! resources.

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod window_config;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use plugin::{ConfigOverrides, CorePlugin};
pub use resources::BoardConfig;
pub use window_config::WindowConfig;
