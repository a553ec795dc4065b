//! Rendering surface and styling.

pub mod frame;
pub mod style;

pub use frame::{Cell, Frame};
pub use style::{Color, Effects, Style};
