//! Pure traversal rules
//!
//! No ECS types beyond `Reflect` derives: everything here is a total
//! function over plain values, usable and testable without an `App`.

pub mod advancer;
pub mod coordinate;

pub use advancer::{advance, initial_position};
pub use coordinate::Coordinate;
