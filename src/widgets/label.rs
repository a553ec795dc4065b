//! Label widget.

use crate::core::geometry::{Rect, Vec2};
use crate::core::layout::{Constraints, LayoutProps};
use crate::core::text::visible_width;
use crate::core::widget::Widget;
use crate::render::frame::Frame;
use crate::render::style::Style;
use crate::theme::Theme;

/// Single-line static text widget.
///
/// Used standalone and as the display view of composite widgets (Button).
pub struct Label {
    text: String,
    style: Option<Style>,
    props: LayoutProps,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
            props: LayoutProps::default(),
        }
    }

    pub fn with_props(text: impl Into<String>, props: LayoutProps) -> Self {
        Self {
            text: text.into(),
            style: None,
            props,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Override the theme's `text_primary` foreground for this label.
    pub fn set_style(&mut self, style: Option<Style>) {
        self.style = style;
    }
}

impl Widget for Label {
    fn render(&mut self, area: Rect, frame: &mut Frame, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        let style = self.style.unwrap_or(theme.text_primary);
        frame.write_symbols_styled(area.min, &self.text, area.width(), style);
    }

    fn layout(&mut self, constraints: &Constraints) -> Vec2 {
        let width = visible_width(&self.text).min(u16::MAX as usize) as u16;
        let desired = Vec2::new(width, 1);
        constraints.apply(self.props.to_constraints().apply(desired))
    }
}

#[cfg(test)]
mod tests {
    use super::Label;
    use crate::core::geometry::{Rect, Vec2};
    use crate::core::layout::{Constraints, LayoutProps};
    use crate::core::widget::Widget;
    use crate::render::frame::Frame;
    use crate::theme::Theme;

    #[test]
    fn layout_is_text_width_by_one() {
        let mut label = Label::new("hello");
        assert_eq!(
            label.layout(&Constraints::unbounded()),
            Vec2::new(5, 1)
        );
    }

    #[test]
    fn own_props_clamp_before_inbound_constraints() {
        let mut label = Label::with_props(
            "a long label",
            LayoutProps {
                max_width: Some(6),
                ..LayoutProps::default()
            },
        );
        assert_eq!(label.layout(&Constraints::unbounded()).x, 6);
        assert_eq!(label.layout(&Constraints::width_range(8, None)).x, 8);
    }

    #[test]
    fn render_truncates_to_area() {
        let mut label = Label::new("hello world");
        let mut frame = Frame::new(8, 1);
        let theme = Theme::default();
        label.render(frame.area(), &mut frame, &theme);
        assert_eq!(frame.row_text(0), "hello wo");
    }

    #[test]
    fn empty_area_renders_nothing() {
        let mut label = Label::new("hello");
        let mut frame = Frame::new(8, 1);
        let before = frame.clone();
        let theme = Theme::default();
        label.render(Rect::default(), &mut frame, &theme);
        assert_eq!(frame, before);
    }
}
