//! Cell-grid frame surface widgets draw into.

use crate::core::geometry::{Rect, Vec2};
use crate::core::text::grapheme_width;
use crate::render::style::Style;

/// One screen cell: a symbol and its resolved style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            style: Style::default(),
        }
    }
}

/// Owned `width x height` cell grid.
///
/// All draw operations clip to the frame bounds; out-of-range coordinates are
/// ignored rather than errors, so widgets can draw against whatever area the
/// host hands them without pre-validating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Full frame region, origin at zero.
    pub fn area(&self) -> Rect {
        Rect::from_origin(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get_mut(y as usize * self.width as usize + x as usize)
    }

    /// Merge `style` onto every cell in the intersection of `rect` with the
    /// frame. Zero-area rects are no-ops.
    pub fn paint_style(&mut self, rect: Rect, style: Style) {
        let clipped = rect.intersect(self.area());
        if clipped.is_empty() {
            return;
        }
        for y in clipped.min.y..clipped.max.y {
            for x in clipped.min.x..clipped.max.x {
                if let Some(cell) = self.cell_mut(x, y) {
                    cell.style = cell.style.merge(&style);
                }
            }
        }
    }

    /// Write the codepoints of `text` left-to-right starting at `pos`.
    ///
    /// Consumes at most `max_width` columns and never writes past the frame
    /// edge. Returns the number of columns consumed. Double-width symbols
    /// occupy their cell plus a blank continuation cell and are skipped
    /// entirely when only one column remains; zero-width scalars are dropped.
    pub fn write_symbols(&mut self, pos: Vec2, text: &str, max_width: u16) -> u16 {
        self.write_symbols_styled(pos, text, max_width, Style::default())
    }

    /// [`write_symbols`](Self::write_symbols) with a style merged onto every
    /// written cell.
    pub fn write_symbols_styled(
        &mut self,
        pos: Vec2,
        text: &str,
        max_width: u16,
        style: Style,
    ) -> u16 {
        if pos.y >= self.height || pos.x >= self.width {
            return 0;
        }

        let budget = max_width.min(self.width - pos.x);
        let mut consumed: u16 = 0;
        let mut buf = [0u8; 4];

        for ch in text.chars() {
            let ch_width = grapheme_width(ch.encode_utf8(&mut buf)) as u16;
            if ch_width == 0 {
                continue;
            }
            if consumed + ch_width > budget {
                break;
            }

            let x = pos.x + consumed;
            if let Some(cell) = self.cell_mut(x, pos.y) {
                cell.symbol = ch;
                cell.style = cell.style.merge(&style);
            }
            for fill in 1..ch_width {
                if let Some(cell) = self.cell_mut(x + fill, pos.y) {
                    cell.symbol = ' ';
                    cell.style = cell.style.merge(&style);
                }
            }
            consumed += ch_width;
        }

        consumed
    }

    /// Concatenated symbols of row `y`; empty when out of range.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let mut out = String::with_capacity(self.width as usize);
        for x in 0..self.width {
            if let Some(cell) = self.cell(x, y) {
                out.push(cell.symbol);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Frame;
    use crate::core::geometry::{Rect, Vec2};
    use crate::render::style::{Color, Effects, Style};

    #[test]
    fn write_symbols_reports_columns_and_respects_budget() {
        let mut frame = Frame::new(10, 1);
        let consumed = frame.write_symbols(Vec2::ZERO, "hello world", 5);
        assert_eq!(consumed, 5);
        assert_eq!(frame.row_text(0), "hello     ");
    }

    #[test]
    fn write_symbols_never_passes_frame_edge() {
        let mut frame = Frame::new(4, 1);
        let consumed = frame.write_symbols(Vec2::new(2, 0), "abcdef", 100);
        assert_eq!(consumed, 2);
        assert_eq!(frame.row_text(0), "  ab");
    }

    #[test]
    fn wide_symbols_take_two_columns() {
        let mut frame = Frame::new(5, 1);
        let consumed = frame.write_symbols(Vec2::ZERO, "你好", 5);
        assert_eq!(consumed, 4);
        assert_eq!(frame.cell(0, 0).map(|c| c.symbol), Some('你'));
        assert_eq!(frame.cell(2, 0).map(|c| c.symbol), Some('好'));
    }

    #[test]
    fn wide_symbol_skipped_when_one_column_remains() {
        let mut frame = Frame::new(3, 1);
        let consumed = frame.write_symbols(Vec2::ZERO, "a你", 3);
        assert_eq!(consumed, 1);
        assert_eq!(frame.row_text(0), "a  ");
    }

    #[test]
    fn paint_style_merges_and_clips() {
        let mut frame = Frame::new(4, 2);
        frame.paint_style(
            Rect::from_origin(Vec2::ZERO, Vec2::new(100, 100)),
            Style::new().bg(Color::Ansi(4)),
        );
        frame.paint_style(
            Rect::from_origin(Vec2::ZERO, Vec2::new(2, 1)),
            Style::new().effect(Effects::UNDERLINE),
        );

        let underlined = frame.cell(0, 0).unwrap();
        assert_eq!(underlined.style.bg, Some(Color::Ansi(4)));
        assert!(underlined.style.effects.contains(Effects::UNDERLINE));

        let plain = frame.cell(3, 1).unwrap();
        assert_eq!(plain.style.bg, Some(Color::Ansi(4)));
        assert!(!plain.style.effects.contains(Effects::UNDERLINE));
    }

    #[test]
    fn zero_area_paint_is_a_no_op() {
        let mut frame = Frame::new(2, 2);
        let before = frame.clone();
        frame.paint_style(Rect::default(), Style::new().bg(Color::Ansi(1)));
        assert_eq!(frame, before);
    }

    #[test]
    fn out_of_range_write_is_a_no_op() {
        let mut frame = Frame::new(2, 2);
        assert_eq!(frame.write_symbols(Vec2::new(5, 0), "x", 10), 0);
        assert_eq!(frame.write_symbols(Vec2::new(0, 5), "x", 10), 0);
    }
}
