//! Step counter HUD
//!
//! Floating overlay in the top-right corner showing how many advances the
//! session has taken, with a "Move Pawn" button mirroring the keyboard and
//! click triggers.

use crate::march::resources::StepCounter;
use crate::march::AdvanceRequested;
use crate::ui::styles::UiColors;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};

/// System rendering the step counter window
pub fn step_counter_ui(
    mut contexts: EguiContexts,
    steps: Res<StepCounter>,
    mut requests: MessageWriter<AdvanceRequested>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("step_counter")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .frame(
            egui::Frame::default()
                .fill(UiColors::BG_OVERLAY)
                .corner_radius(5.0)
                .inner_margin(10.0)
                .stroke(egui::Stroke::new(1.0, UiColors::BORDER)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{}", steps.count()))
                        .size(18.0)
                        .color(UiColors::TEXT_PRIMARY)
                        .strong(),
                );
                ui.label(
                    egui::RichText::new("steps")
                        .size(12.0)
                        .color(UiColors::TEXT_SECONDARY),
                );
            });
            ui.add_space(5.0);
            if ui.button("Move Pawn").clicked() {
                requests.write(AdvanceRequested);
            }
        });
}

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, step_counter_ui);
    }
}
