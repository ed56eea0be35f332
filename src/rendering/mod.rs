//! Rendering module - 3D scene visualization
//!
//! Manages the visual side of the scene with Bevy's 3D pipeline:
//!
//! - `board` - Checkerboard of flat square meshes
//! - `pawn` - The live pawn built from primitive meshes, kept in sync with
//!   the session position
//! - `trail_markers` - Red ghost pawns, one per trail entry
//! - `camera` - Scene camera with WASD panning and scroll zoom
//! - `utils` - Shared material handles and the board-square component
//!
//! Meshes use `Mesh3d` + `MeshMaterial3d<StandardMaterial>`; the pawn's
//! child meshes carry `PointerInteraction` so mesh picking can route
//! clicks to the pawn's observer.

pub mod board;
pub mod camera;
pub mod pawn;
pub mod trail_markers;
pub mod utils;

// Re-export commonly used items
pub use board::BoardPlugin;
pub use camera::{CameraController, CameraPlugin};
pub use pawn::PawnPlugin;
pub use utils::{BoardSquare, SceneMaterials};
