//! Widget rendering against the cell frame.

use loom_tui::{
    Button, ButtonConfig, Constraints, Effects, Focusable, Frame, Input, InputConfig, Rect, Theme,
    Vec2, Widget,
};

fn area(width: u16, height: u16) -> Rect {
    Rect::from_origin(Vec2::ZERO, Vec2::new(width, height))
}

#[test]
fn input_paints_interactive_underlined_background() {
    let mut input = Input::new(InputConfig::default());
    let mut frame = Frame::new(6, 1);
    let theme = Theme::default();

    input.render(area(6, 1), &mut frame, &theme);

    for x in 0..6 {
        let cell = frame.cell(x, 0).unwrap();
        assert_eq!(cell.style.bg, theme.interactive.bg);
        assert!(cell.style.effects.contains(Effects::UNDERLINE));
    }
}

#[test]
fn empty_input_shows_placeholder_in_secondary_style() {
    let mut input = Input::new(InputConfig {
        placeholder: "name".to_string(),
        ..InputConfig::default()
    });
    let mut frame = Frame::new(8, 1);
    let theme = Theme::default();

    input.render(frame.area(), &mut frame, &theme);

    assert_eq!(frame.row_text(0), "name    ");
    assert_eq!(frame.cell(0, 0).unwrap().style.fg, theme.text_secondary.fg);
}

#[test]
fn value_replaces_placeholder_once_typed() {
    let mut input = Input::new(InputConfig {
        placeholder: "name".to_string(),
        ..InputConfig::default()
    });
    input.set_value("ok");
    let mut frame = Frame::new(8, 1);
    let theme = Theme::default();

    input.render(frame.area(), &mut frame, &theme);
    assert_eq!(frame.row_text(0), "ok      ");
}

#[test]
fn zero_height_area_renders_nothing() {
    let mut input = Input::new(InputConfig::default());
    input.set_value("hello");
    let mut frame = Frame::new(8, 1);
    let untouched = frame.clone();
    let theme = Theme::default();

    input.render(area(8, 0), &mut frame, &theme);
    assert_eq!(frame, untouched);
}

#[test]
fn focused_input_draws_a_reverse_cursor_cell() {
    let mut input = Input::new(InputConfig::default());
    input.set_value("abc");
    input.set_focused(true);
    input.layout(&Constraints::width_range(0, Some(8)));

    let mut frame = Frame::new(8, 1);
    let theme = Theme::default();
    input.render(frame.area(), &mut frame, &theme);

    let cursor_cell = frame.cell(3, 0).unwrap();
    assert!(cursor_cell.style.effects.contains(Effects::REVERSE));
    let plain_cell = frame.cell(2, 0).unwrap();
    assert!(!plain_cell.style.effects.contains(Effects::REVERSE));
}

#[test]
fn cursor_cell_is_pinned_to_the_last_column() {
    let mut input = Input::new(InputConfig::default());
    input.set_value("abcdefghij");
    input.set_focused(true);
    // No layout pass: the cursor column would fall past a narrow area.

    let mut frame = Frame::new(4, 1);
    let theme = Theme::default();
    input.render(frame.area(), &mut frame, &theme);

    let last = frame.cell(3, 0).unwrap();
    assert!(last.style.effects.contains(Effects::REVERSE));
}

#[test]
fn unfocused_input_has_no_cursor_cell() {
    let mut input = Input::new(InputConfig::default());
    input.set_value("abc");

    let mut frame = Frame::new(8, 1);
    let theme = Theme::default();
    input.render(frame.area(), &mut frame, &theme);

    for x in 0..8 {
        assert!(!frame
            .cell(x, 0)
            .unwrap()
            .style
            .effects
            .contains(Effects::REVERSE));
    }
}

#[test]
fn scrolled_input_renders_from_view_start() {
    let mut input = Input::new(InputConfig::default());
    input.set_value("abcdefghij");
    input.layout(&Constraints::width_range(0, Some(5)));
    assert_eq!(input.view_start(), 6);

    let mut frame = Frame::new(5, 1);
    let theme = Theme::default();
    input.render(frame.area(), &mut frame, &theme);
    assert_eq!(frame.row_text(0), "ghij ");
}

#[test]
fn button_renders_its_decorated_label() {
    let mut button = Button::new(ButtonConfig {
        label: "OK".to_string(),
        ..ButtonConfig::default()
    });
    let size = button.layout(&Constraints::unbounded());
    assert_eq!(size, Vec2::new(4, 1));

    let mut frame = Frame::new(6, 1);
    let theme = Theme::default();
    button.render(area(4, 1), &mut frame, &theme);
    assert_eq!(frame.row_text(0), "[OK]  ");
}

#[test]
fn focused_button_gets_the_focus_accent() {
    let mut button = Button::new(ButtonConfig {
        label: "OK".to_string(),
        ..ButtonConfig::default()
    });
    button.set_focused(true);

    let mut frame = Frame::new(6, 1);
    let theme = Theme::default();
    button.render(frame.area(), &mut frame, &theme);

    assert_eq!(frame.row_text(0), "[OK]  ");
    // Label text takes the text style; uncovered accent cells keep the focus fg.
    assert_eq!(frame.cell(0, 0).unwrap().style.fg, theme.text_primary.fg);
    assert_eq!(frame.cell(5, 0).unwrap().style.fg, theme.focus.fg);
}
