//! UI styling

pub mod colors;

pub use colors::UiColors;
