//! Cell-buffer TUI widget toolkit.
//!
//! Invariant: widgets never touch the terminal — all drawing lands in a
//! [`Frame`] the host owns and flushes through its own backend.
//!
//! # Public API Overview
//! - Compose [`Input`], [`Button`], and [`Label`] widgets behind the
//!   [`Widget`] trait; the host tree dispatches `layout`, `render`, and
//!   `handle_event` top-down.
//! - Parse raw terminal bytes into [`InputEvent`]s with
//!   [`parse_input_events`], or construct events directly.
//! - Style rendering through [`Theme`] slots; inspect output through
//!   [`Frame`] cells.
//! - Drive focus with each widget's embedded [`FocusHandler`]; traversal
//!   requests surface to the host, which owns focus policy.

pub mod config;
pub mod logging;

pub mod core;
pub mod render;
pub mod theme;
pub mod widgets;

/// Built-in widgets and their configs.
pub use crate::widgets::{
    Button, ButtonConfig, ButtonPressFn, Input, InputChangeFn, InputConfig, Label,
};

/// Widget capability traits.
pub use crate::core::widget::{is_focusable, Focusable, Widget};

/// Focus handling embedded in widgets.
pub use crate::core::focus::{FocusHandler, FocusRequest};

/// Input event model and raw-byte decoding.
pub use crate::core::input_event::{parse_input_events, EventResult, InputEvent, Key, Modifiers};

/// Geometry and layout constraint types.
pub use crate::core::geometry::{Rect, Vec2};
pub use crate::core::layout::{Constraints, LayoutProps};

/// Render surface and styling.
pub use crate::render::{Cell, Color, Effects, Frame, Style};
pub use crate::theme::Theme;

/// Codepoint and display-width helpers.
pub use crate::core::text::{byte_offset, codepoint_len, visible_width};
