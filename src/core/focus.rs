//! Per-widget focus handling.

use crate::core::geometry::Rect;
use crate::core::input_event::{EventResult, InputEvent, Key, Modifiers};
use crate::render::frame::Frame;
use crate::theme::Theme;

/// Traversal direction requested by a focused widget's handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    Next,
    Prev,
}

/// Focus state embedded in each focusable widget.
///
/// Widgets delegate to the handler first in both rendering (focus accent)
/// and event handling (traversal keys); a consumed event is not processed
/// further by the widget. The handler only records traversal requests;
/// moving focus between widgets is host policy, surfaced via
/// [`take_request`](Self::take_request).
#[derive(Debug, Default)]
pub struct FocusHandler {
    focused: bool,
    request: Option<FocusRequest>,
}

impl FocusHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.request = None;
        }
    }

    /// Paint the focus accent over `area` when focused.
    pub fn render(&self, area: Rect, frame: &mut Frame, theme: &Theme) {
        if !self.focused || area.is_empty() {
            return;
        }
        frame.paint_style(area, theme.focus);
    }

    /// First-refusal event handling: consumes Tab/back-tab while focused,
    /// recording the traversal request for the host.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        if !self.focused {
            return EventResult::Ignored;
        }

        let InputEvent::Key { key, modifiers } = event else {
            return EventResult::Ignored;
        };

        match key {
            Key::Tab if modifiers.contains(Modifiers::SHIFT) => {
                self.request = Some(FocusRequest::Prev);
                EventResult::Consumed
            }
            Key::Tab => {
                self.request = Some(FocusRequest::Next);
                EventResult::Consumed
            }
            Key::BackTab => {
                self.request = Some(FocusRequest::Prev);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Pending traversal request, cleared on read.
    pub fn take_request(&mut self) -> Option<FocusRequest> {
        self.request.take()
    }
}
