//! Color palette for overlay UI
//!
//! Dark translucent panels with light text, defined as egui::Color32 for
//! direct use in UI code.

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    /// Overlay background (semi-transparent)
    pub const BG_OVERLAY: egui::Color32 = egui::Color32::from_black_alpha(220);

    /// Panel border
    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(60, 60, 65);

    /// Primary text (the step count)
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Secondary text (labels)
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(170, 170, 180);
}
