//! Cell grid that screens draw into.
//!
//! A [`Buffer`] is a row-major grid of [`Cell`]s. Text is laid out by
//! grapheme cluster and measured with `unicode-width`, so wide glyphs take
//! two columns and a following continuation cell. Drawing respects the
//! clip region on top of the scissor stack.
//!
//! ```
//! use termfolio::{Buffer, Rgb, Style};
//!
//! let mut buf = Buffer::new(20, 2);
//! buf.clear(Rgb::BLACK);
//! buf.draw_text(0, 0, "~/showcase/home", Style::fg(Rgb::WHITE));
//! assert_eq!(buf.row_text(0).trim_end(), "~/showcase/home");
//! ```

mod drawing;
mod scissor;

pub use drawing::{BoxStyle, wrap_text};
pub use scissor::{ClipRect, ScissorStack};

use crate::cell::Cell;
use crate::color::Rgb;
use crate::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Row-major cell grid with a clip stack.
#[derive(Clone, Debug)]
pub struct Buffer {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    scissor: ScissorStack,
}

impl Buffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            scissor: ScissorStack::default(),
        }
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The whole buffer as a rectangle.
    #[must_use]
    pub fn area(&self) -> ClipRect {
        ClipRect::new(0, 0, self.width, self.height)
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    fn is_visible(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.scissor.contains(x, y)
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Replace the cell at `(x, y)`.
    ///
    /// Wide cells claim the next column as a continuation; a wide cell that
    /// would straddle the clip edge is replaced by a blank. Overwriting half
    /// of an existing wide glyph blanks the other half.
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        if !self.is_visible(x, y) {
            return;
        }
        self.break_wide_at(x, y);

        let wide = cell.display_width() > 1;
        if wide {
            let fits = x + 1 < self.width && self.scissor.contains(x + 1, y);
            if !fits {
                self.put(x, y, Cell::clear(cell.bg));
                return;
            }
            self.break_wide_at(x + 1, y);
            let bg = cell.bg;
            self.put(x, y, cell);
            self.put(x + 1, y, Cell::continuation(bg));
        } else {
            self.put(x, y, cell);
        }
    }

    fn put(&mut self, x: u32, y: u32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    // Blank the partner of a wide glyph that (x, y) is part of.
    fn break_wide_at(&mut self, x: u32, y: u32) {
        let Some(i) = self.index(x, y) else { return };
        if self.cells[i].is_continuation() {
            if x > 0 {
                let bg = self.cells[i - 1].bg;
                self.cells[i - 1] = Cell::clear(bg);
            }
        } else if self.cells[i].display_width() > 1 && x + 1 < self.width {
            let bg = self.cells[i + 1].bg;
            self.cells[i + 1] = Cell::clear(bg);
        }
    }

    /// Blank every cell on `bg`. Ignores the clip stack.
    pub fn clear(&mut self, bg: Rgb) {
        self.cells.fill(Cell::clear(bg));
    }

    /// Blank a rectangle on `bg`, clipped.
    pub fn fill_rect(&mut self, rect: ClipRect, bg: Rgb) {
        let area = rect.intersect(&self.area()).intersect(&self.scissor.current());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.break_wide_at(x, y);
                self.put(x, y, Cell::clear(bg));
            }
        }
    }

    /// Draw a single line of text starting at `(x, y)`.
    ///
    /// Unset style colors keep whatever the target cell already had. Control
    /// characters are skipped. Returns the number of columns advanced, which
    /// may run past the clip edge.
    pub fn draw_text(&mut self, x: u32, y: u32, text: &str, style: Style) -> u32 {
        let mut col = x;
        for grapheme in text.graphemes(true) {
            if grapheme.chars().any(char::is_control) {
                continue;
            }
            let width = u32::try_from(grapheme.width()).unwrap_or(1);
            if width == 0 {
                continue;
            }
            if let Some(existing) = self.get(col, y) {
                let resolved = Style {
                    fg: style.fg.or(Some(existing.fg)),
                    bg: style.bg.or(Some(existing.bg)),
                    attributes: style.attributes,
                };
                self.set(col, y, Cell::from_grapheme(grapheme, resolved));
            }
            col = col.saturating_add(width);
        }
        col - x
    }

    /// Draw text, cutting it off after `max_width` columns.
    pub fn draw_text_clipped(
        &mut self,
        x: u32,
        y: u32,
        max_width: u32,
        text: &str,
        style: Style,
    ) -> u32 {
        self.push_scissor(ClipRect::new(x, y, max_width, 1));
        let advanced = self.draw_text(x, y, text, style);
        self.pop_scissor();
        advanced.min(max_width)
    }

    pub fn push_scissor(&mut self, rect: ClipRect) {
        self.scissor.push(rect);
    }

    pub fn pop_scissor(&mut self) {
        self.scissor.pop();
    }

    /// Reallocate to a new size; all content is dropped.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Text of row `y`, one character per column (wide glyphs count once).
    #[must_use]
    pub fn row_text(&self, y: u32) -> String {
        let mut out = String::with_capacity(self.width as usize);
        if y >= self.height {
            return out;
        }
        let start = y as usize * self.width as usize;
        for cell in &self.cells[start..start + self.width as usize] {
            cell.push_str_to(&mut out);
        }
        out
    }

    /// All rows with trailing blanks trimmed, joined by newlines.
    #[must_use]
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellContent;

    #[test]
    fn test_draw_text_inherits_background() {
        let mut buf = Buffer::new(10, 1);
        let panel = Rgb::new(1, 2, 3);
        buf.clear(panel);
        buf.draw_text(0, 0, "hi", Style::fg(Rgb::WHITE));
        assert_eq!(buf.get(0, 0).unwrap().bg, panel);
        assert_eq!(buf.get(1, 0).unwrap().fg, Rgb::WHITE);
    }

    #[test]
    fn test_wide_glyph_takes_two_columns() {
        let mut buf = Buffer::new(4, 1);
        let advanced = buf.draw_text(0, 0, "日本", Style::NONE);
        assert_eq!(advanced, 4);
        assert!(buf.get(1, 0).unwrap().is_continuation());
        assert_eq!(buf.row_text(0), "日本");
    }

    #[test]
    fn test_wide_glyph_at_edge_becomes_blank() {
        let mut buf = Buffer::new(3, 1);
        buf.draw_text(2, 0, "日", Style::NONE);
        assert_eq!(buf.get(2, 0).unwrap().content, CellContent::Empty);
    }

    #[test]
    fn test_overwriting_half_of_wide_glyph() {
        let mut buf = Buffer::new(4, 1);
        buf.draw_text(0, 0, "日", Style::NONE);
        buf.draw_text(1, 0, "x", Style::NONE);
        assert_eq!(buf.row_text(0), " x  ");
    }

    #[test]
    fn test_clipped_text() {
        let mut buf = Buffer::new(10, 1);
        let advanced = buf.draw_text_clipped(2, 0, 3, "abcdef", Style::NONE);
        assert_eq!(advanced, 3);
        assert_eq!(buf.row_text(0), "  abc     ");
    }

    #[test]
    fn test_control_chars_are_skipped() {
        let mut buf = Buffer::new(5, 1);
        buf.draw_text(0, 0, "a\tb\n", Style::NONE);
        assert_eq!(buf.to_text(), "ab");
    }

    #[test]
    fn test_fill_rect_respects_bounds() {
        let mut buf = Buffer::new(4, 2);
        let red = Rgb::new(255, 0, 0);
        buf.fill_rect(ClipRect::new(2, 1, 10, 10), red);
        assert_eq!(buf.get(3, 1).unwrap().bg, red);
        assert_eq!(buf.get(1, 1).unwrap().bg, Rgb::BLACK);
        assert_eq!(buf.get(3, 0).unwrap().bg, Rgb::BLACK);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut buf = Buffer::new(2, 2);
        buf.set(5, 5, Cell::new('x', Style::NONE));
        assert!(buf.get(5, 5).is_none());
        assert_eq!(buf.row_text(9), "");
    }
}
