//! Cell styling: colors, effect flags, and mergeable styles.

use bitflags::bitflags;

/// Color of a cell's foreground or background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Color {
    /// Terminal's own default color.
    #[default]
    Default,
    /// ANSI palette index (0-15 named, 16-231 cube, 232-255 grayscale).
    Ansi(u8),
    Rgb(u8, u8, u8),
}

bitflags! {
    /// Text rendering effects.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Effects: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const UNDERLINE = 1 << 2;
        const REVERSE = 1 << 3;
    }
}

/// A partial style: unset fields leave the underlying cell untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub effects: Effects,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn effect(mut self, effects: Effects) -> Self {
        self.effects |= effects;
        self
    }

    /// Layer `other` on top of this style.
    ///
    /// Set fields of `other` win; effects are unioned so an underline pass
    /// over a colored region keeps the color.
    pub fn merge(&self, other: &Style) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            effects: self.effects | other.effects,
        }
    }
}
