//! Input widget.

use crate::core::focus::FocusHandler;
use crate::core::geometry::{Rect, Vec2};
use crate::core::input_event::{EventResult, InputEvent, Key};
use crate::core::layout::{Constraints, LayoutProps};
use crate::core::text::{byte_offset, codepoint_len};
use crate::core::widget::{Focusable, Widget};
use crate::render::frame::Frame;
use crate::render::style::{Effects, Style};
use crate::theme::Theme;

/// Value-change callback; receives the buffer contents after each edit.
pub type InputChangeFn = Box<dyn FnMut(&str)>;

/// Construction options for [`Input`].
#[derive(Default)]
pub struct InputConfig {
    pub placeholder: String,
    pub props: LayoutProps,
}

/// Single-line input widget with horizontal scrolling.
///
/// `cursor` and `view_start` are codepoint indices. The cursor stays in
/// `[0, value length]`; the viewport is reconciled during `layout` so the
/// cursor cell is always visible after a layout pass.
pub struct Input {
    placeholder: String,
    value: String,
    cursor: usize,
    view_start: usize,
    props: LayoutProps,
    focus: FocusHandler,
    on_change: Option<InputChangeFn>,
}

impl Input {
    pub fn new(config: InputConfig) -> Self {
        Self {
            placeholder: config.placeholder,
            value: String::new(),
            cursor: 0,
            view_start: 0,
            props: config.props,
            focus: FocusHandler::new(),
            on_change: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position as a codepoint index into the value.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// First visible codepoint of the displayed text.
    pub fn view_start(&self) -> usize {
        self.view_start
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Replace the buffer and move the cursor to the end of the new value.
    ///
    /// This is a programmatic reset, not a user edit: the change callback is
    /// not invoked. `view_start` is also left untouched and may transiently
    /// exceed the new value's length until the next `layout` pass reconciles
    /// the viewport.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = codepoint_len(&self.value);
    }

    pub fn set_on_change(&mut self, handler: Option<InputChangeFn>) {
        self.on_change = handler;
    }

    fn value_len(&self) -> usize {
        codepoint_len(&self.value)
    }

    /// Text shown in the viewport: the placeholder stands in for an empty
    /// value, but edits always target the value.
    fn displayed_text(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    fn notify_change(&mut self) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(&self.value);
        }
    }

    /// Ordered insert of `text` at the cursor; returns codepoints inserted.
    fn insert_at_cursor(&mut self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let at = byte_offset(&self.value, self.cursor);
        self.value.insert_str(at, text);
        codepoint_len(text)
    }

    /// Ordered removal of the codepoint at `index`.
    fn remove_codepoint(&mut self, index: usize) {
        let start = byte_offset(&self.value, index);
        let end = byte_offset(&self.value, index + 1);
        self.value.replace_range(start..end, "");
    }

    /// Largest width this widget may occupy: its own max-width bound clamped
    /// into the inbound constraint range. `None` means unbounded.
    fn effective_max_width(&self, constraints: &Constraints) -> Option<u16> {
        self.props.constrain(constraints).effective_max_width()
    }
}

impl Widget for Input {
    fn render(&mut self, area: Rect, frame: &mut Frame, theme: &Theme) {
        if area.height() == 0 {
            return;
        }

        frame.paint_style(area, theme.interactive.effect(Effects::UNDERLINE));
        self.focus.render(area, frame, theme);

        let hint = self.value.is_empty();
        let text = self.displayed_text();
        let visible = &text[byte_offset(text, self.view_start)..];
        if hint {
            frame.write_symbols_styled(area.min, visible, area.width(), theme.text_secondary);
        } else {
            frame.write_symbols(area.min, visible, area.width());
        }

        if self.focus.focused() && area.width() > 0 {
            let column = self.cursor.saturating_sub(self.view_start);
            let column = (column.min(u16::MAX as usize) as u16).min(area.width() - 1);
            let cursor_cell = Rect::from_origin(
                area.min.add(Vec2::new(column, 0)),
                Vec2::new(1, 1),
            );
            frame.paint_style(cursor_cell, Style::new().effect(Effects::REVERSE));
        }
    }

    fn layout(&mut self, constraints: &Constraints) -> Vec2 {
        if self.cursor < self.view_start {
            self.view_start = self.cursor;
        } else if let Some(max_width) = self.effective_max_width(constraints) {
            // +1 reserves the cursor indicator cell.
            let visible = self.cursor - self.view_start + 1;
            let max_width = (max_width as usize).max(1);
            if visible > max_width {
                self.view_start += visible - max_width;
                crate::debug_log!(
                    "input viewport advanced to {} (cursor {})",
                    self.view_start,
                    self.cursor
                );
            }
        }

        let shown = codepoint_len(self.displayed_text()).saturating_sub(self.view_start);
        let desired = Vec2::new(shown.saturating_add(1).min(u16::MAX as usize) as u16, 1);
        constraints.apply(self.props.to_constraints().apply(desired))
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        if self.focus.handle_event(event).is_consumed() {
            return EventResult::Consumed;
        }

        match event {
            InputEvent::Key { key: Key::Left, .. } => {
                self.cursor = self.cursor.saturating_sub(1);
                EventResult::Consumed
            }
            InputEvent::Key { key: Key::Right, .. } => {
                self.cursor = (self.cursor + 1).min(self.value_len());
                EventResult::Consumed
            }
            InputEvent::Key { key: Key::Home, .. } => {
                self.cursor = 0;
                EventResult::Consumed
            }
            InputEvent::Key { key: Key::End, .. } => {
                self.cursor = self.value_len();
                EventResult::Consumed
            }
            InputEvent::Key {
                key: Key::Backspace,
                ..
            } => {
                if self.cursor > 0 {
                    self.remove_codepoint(self.cursor - 1);
                    self.notify_change();
                    self.cursor = self.cursor.saturating_sub(1);
                }
                EventResult::Consumed
            }
            InputEvent::Key {
                key: Key::Delete, ..
            } => {
                if self.cursor < self.value_len() {
                    self.remove_codepoint(self.cursor);
                    self.notify_change();
                }
                EventResult::Consumed
            }
            InputEvent::Char(ch) => {
                let mut buf = [0u8; 4];
                self.insert_at_cursor(ch.encode_utf8(&mut buf));
                self.notify_change();
                self.cursor += 1;
                EventResult::Consumed
            }
            InputEvent::Paste(text) => {
                let cleaned = text.replace(['\r', '\n'], "");
                let inserted = self.insert_at_cursor(&cleaned);
                if inserted > 0 {
                    self.notify_change();
                    self.cursor += inserted;
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn as_focusable(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }
}

impl Focusable for Input {
    fn set_focused(&mut self, focused: bool) {
        self.focus.set_focused(focused);
    }

    fn is_focused(&self) -> bool {
        self.focus.focused()
    }
}
