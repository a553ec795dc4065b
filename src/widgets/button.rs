//! Button widget.

use crate::core::focus::FocusHandler;
use crate::core::geometry::{Rect, Vec2};
use crate::core::input_event::{EventResult, InputEvent};
use crate::core::layout::{Constraints, LayoutProps};
use crate::core::widget::{Focusable, Widget};
use crate::render::frame::Frame;
use crate::theme::Theme;
use crate::widgets::label::Label;

/// Press callback; receives the decorated display text.
pub type ButtonPressFn = Box<dyn FnMut(&str)>;

/// Construction options for [`Button`].
#[derive(Default)]
pub struct ButtonConfig {
    pub label: String,
    pub props: LayoutProps,
}

/// Activatable widget rendering its label as `[label]`.
///
/// Drawing and sizing delegate to an owned [`Label`] holding the decorated
/// text; only that copy of the label survives construction.
pub struct Button {
    view: Label,
    focus: FocusHandler,
    on_press: Option<ButtonPressFn>,
}

impl Button {
    pub fn new(config: ButtonConfig) -> Self {
        let decorated = format!("[{}]", config.label);
        Self {
            view: Label::with_props(decorated, config.props),
            focus: FocusHandler::new(),
            on_press: None,
        }
    }

    /// Decorated display text, brackets included.
    pub fn text(&self) -> &str {
        self.view.text()
    }

    pub fn set_on_press(&mut self, handler: Option<ButtonPressFn>) {
        self.on_press = handler;
    }
}

impl Widget for Button {
    fn render(&mut self, area: Rect, frame: &mut Frame, theme: &Theme) {
        self.focus.render(area, frame, theme);
        self.view.render(area, frame, theme);
    }

    fn layout(&mut self, constraints: &Constraints) -> Vec2 {
        self.view.layout(constraints)
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        if self.focus.handle_event(event).is_consumed() {
            return EventResult::Consumed;
        }

        if let InputEvent::Char(' ') = event {
            if let Some(handler) = self.on_press.as_mut() {
                handler(self.view.text());
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl Focusable for Button {
    fn set_focused(&mut self, focused: bool) {
        self.focus.set_focused(focused);
    }

    fn is_focused(&self) -> bool {
        self.focus.focused()
    }
}
