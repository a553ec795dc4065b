//! Widget and Focusable capability traits.

use crate::core::geometry::{Rect, Vec2};
use crate::core::input_event::{EventResult, InputEvent};
use crate::core::layout::Constraints;
use crate::render::frame::Frame;
use crate::theme::Theme;

/// Core widget interface the host tree dispatches against.
///
/// The host calls `layout` to size a widget, `render` to draw it into the
/// allotted area, and `handle_event` to offer it input. Widgets are owned by
/// value in the host tree (`Box<dyn Widget>`); none holds a reference to its
/// parent.
pub trait Widget {
    /// Draw into `area` of `frame`. A zero-height or zero-width area must be
    /// a no-op, not an error.
    fn render(&mut self, area: Rect, frame: &mut Frame, theme: &Theme);

    /// Desired size under the inbound constraints.
    fn layout(&mut self, constraints: &Constraints) -> Vec2;

    /// Offer an input event; `Consumed` halts propagation.
    fn handle_event(&mut self, _event: &InputEvent) -> EventResult {
        EventResult::Ignored
    }

    /// Optional focus behavior for widgets that track focus.
    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        None
    }
}

/// Focus behavior for widgets that render differently while focused.
pub trait Focusable {
    fn set_focused(&mut self, focused: bool);
    fn is_focused(&self) -> bool;
}

/// Returns whether a widget exposes focus behavior via [`Focusable`].
pub fn is_focusable(widget: &mut dyn Widget) -> bool {
    widget.as_focusable().is_some()
}
