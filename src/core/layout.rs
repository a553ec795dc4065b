//! Size constraints and per-widget layout bounds.

use crate::core::geometry::Vec2;

/// Inbound layout constraints handed to a widget by its container.
///
/// `None` max bounds mean unbounded. Minimums win over maximums when the two
/// conflict, so a container can force a floor even under a tight ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Constraints {
    pub min_width: u16,
    pub max_width: Option<u16>,
    pub min_height: u16,
    pub max_height: Option<u16>,
}

impl Constraints {
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Exact-fit constraints for a known size.
    pub fn tight(size: Vec2) -> Self {
        Self {
            min_width: size.x,
            max_width: Some(size.x),
            min_height: size.y,
            max_height: Some(size.y),
        }
    }

    /// Width range with unconstrained height.
    pub fn width_range(min_width: u16, max_width: Option<u16>) -> Self {
        Self {
            min_width,
            max_width,
            ..Self::default()
        }
    }

    /// Clamp a requested size into the allowed range.
    pub fn apply(&self, size: Vec2) -> Vec2 {
        let mut x = size.x.max(self.min_width);
        if let Some(max) = self.max_width {
            x = x.min(max.max(self.min_width));
        }
        let mut y = size.y.max(self.min_height);
        if let Some(max) = self.max_height {
            y = y.min(max.max(self.min_height));
        }
        Vec2::new(x, y)
    }

    /// Largest width a widget may claim under these constraints.
    pub fn effective_max_width(&self) -> Option<u16> {
        self.max_width.map(|max| max.max(self.min_width))
    }
}

/// Per-widget layout bounds carried in widget configs.
///
/// These narrow whatever the container offers; a widget never sizes itself
/// outside both its own bounds and the inbound constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutProps {
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub min_height: Option<u16>,
    pub max_height: Option<u16>,
}

impl LayoutProps {
    /// These bounds expressed as standalone constraints.
    pub fn to_constraints(&self) -> Constraints {
        Constraints {
            min_width: self.min_width.unwrap_or(0),
            max_width: self.max_width,
            min_height: self.min_height.unwrap_or(0),
            max_height: self.max_height,
        }
    }

    /// Narrow inbound constraints by this widget's own bounds.
    pub fn constrain(&self, inbound: &Constraints) -> Constraints {
        let mut out = *inbound;
        if let Some(min) = self.min_width {
            out.min_width = out.min_width.max(min);
        }
        if let Some(max) = self.max_width {
            out.max_width = Some(out.max_width.map_or(max, |m| m.min(max)));
        }
        if let Some(min) = self.min_height {
            out.min_height = out.min_height.max(min);
        }
        if let Some(max) = self.max_height {
            out.max_height = Some(out.max_height.map_or(max, |m| m.min(max)));
        }
        out
    }
}
