//! UI module - egui overlays
//!
//! - **hud**: Step counter and the "Move Pawn" button
//! - **styles**: Shared color palette for overlay windows
//!
//! Uses `bevy_egui`: overlay systems run in `EguiPrimaryContextPass` and
//! access the context via `EguiContexts`, bailing out gracefully when the
//! context is unavailable.

pub mod hud;
pub mod styles;

pub use hud::HudPlugin;
