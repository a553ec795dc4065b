//! Named style slots consumed by the built-in widgets.

use crate::render::style::{Color, Style};

/// Widget style palette.
///
/// Widgets pull named slots instead of hard-coding colors, so a host restyles
/// every widget by swapping one value. Slots hold partial [`Style`]s; a slot
/// that only sets a background composes with whatever foreground is already
/// painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Background for editable regions (inputs).
    pub interactive: Style,
    /// Opaque background for filled regions.
    pub solid: Style,
    /// Default text foreground.
    pub text_primary: Style,
    /// Muted foreground for hints and placeholders.
    pub text_secondary: Style,
    /// Accent painted over a focused widget's area.
    pub focus: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            interactive: Style::new().bg(Color::Ansi(236)),
            solid: Style::new().bg(Color::Ansi(234)),
            text_primary: Style::new().fg(Color::Ansi(252)),
            text_secondary: Style::new().fg(Color::Ansi(245)),
            focus: Style::new().fg(Color::Ansi(39)),
        }
    }
}
