//! Advance triggers

use crate::march::events::AdvanceRequested;
use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;

/// Helper to check if primary button (left click) was used
fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Space advances the pawn one square
pub fn keyboard_advance_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: MessageWriter<AdvanceRequested>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        requests.write(AdvanceRequested);
    }
}

/// Observer: left-clicking the pawn advances it
///
/// Attached to the pawn entity at spawn; pointer events from the child
/// meshes bubble up to it.
pub fn on_pawn_click(click: On<Pointer<Click>>, mut requests: MessageWriter<AdvanceRequested>) {
    if !is_primary(click.event.button) {
        return;
    }
    debug!("[INPUT] Pawn clicked");
    requests.write(AdvanceRequested);
}
