//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - Turn clicks, key presses, and camera input into messages
//! 2. **Execution** - Apply buffered advance requests to session state
//! 3. **Visual** - Sync the pawn transform and spawn ghost markers

use bevy::prelude::*;

/// System execution order for the march
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum MarchSystems {
    /// Input handling (pointer observers, keyboard, camera)
    Input,

    /// Session state updates (advance execution)
    Execution,

    /// Visual updates (pawn transform, ghost markers)
    Visual,
}
