//! March systems - input triggers and advance execution
//!
//! - [`input`] - Keyboard trigger and the pawn click observer
//! - [`advance`] - The advance executor applying one step per request

pub mod advance;
pub mod input;

pub use advance::advance_pawn;
pub use input::{keyboard_advance_input, on_pawn_click};
