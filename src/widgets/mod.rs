//! Built-in widgets.

pub mod button;
pub mod input;
pub mod label;

pub use button::{Button, ButtonConfig, ButtonPressFn};
pub use input::{Input, InputChangeFn, InputConfig};
pub use label::Label;
