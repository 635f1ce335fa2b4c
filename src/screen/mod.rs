//! Drawing view state into a [`Buffer`].
//!
//! Everything here is a pure function of the state it is handed: no
//! timers, no I/O. The renderer takes care of getting the buffer onto the
//! terminal.

mod resume;
mod showcase;
mod theme;

pub use resume::draw_resume;
pub use showcase::draw_showcase;
pub use theme::Theme;

use crate::buffer::{Buffer, ClipRect, wrap_text};
use crate::style::Style;
use unicode_width::UnicodeWidthStr;

/// Top row: three window buttons followed by a path.
fn draw_title_bar(buf: &mut Buffer, theme: &Theme, path: &str) {
    let width = buf.width();
    buf.fill_rect(ClipRect::new(0, 0, width, 1), theme.panel);
    let mut x = 1;
    for color in [theme.error, theme.warning, theme.green] {
        buf.draw_text(x, 0, "●", Style::fg(color));
        x += 2;
    }
    buf.draw_text_clipped(x + 1, 0, width.saturating_sub(x + 1), path, theme.muted());
}

/// Writes lines top to bottom inside a rectangle and stops at its bottom.
struct Pen<'a> {
    buf: &'a mut Buffer,
    rect: ClipRect,
    row: u32,
}

impl<'a> Pen<'a> {
    fn new(buf: &'a mut Buffer, rect: ClipRect) -> Self {
        Self { buf, rect, row: 0 }
    }

    fn is_full(&self) -> bool {
        self.row >= self.rect.height
    }

    fn line(&mut self, text: &str, style: Style) {
        self.spans(&[(text, style)]);
    }

    /// One row made of differently styled pieces.
    fn spans(&mut self, spans: &[(&str, Style)]) {
        if self.is_full() {
            return;
        }
        let y = self.rect.y + self.row;
        let mut x = self.rect.x;
        for (text, style) in spans {
            let room = self.rect.right().saturating_sub(x);
            if room == 0 {
                break;
            }
            x += self.buf.draw_text_clipped(x, y, room, text, *style);
        }
        self.row += 1;
    }

    fn wrapped(&mut self, text: &str, style: Style) {
        self.wrapped_indent(text, style, 0);
    }

    fn wrapped_indent(&mut self, text: &str, style: Style, indent: u32) {
        let width = self.rect.width.saturating_sub(indent) as usize;
        for line in wrap_text(text, width) {
            if self.is_full() {
                return;
            }
            let y = self.rect.y + self.row;
            self.buf
                .draw_text_clipped(self.rect.x + indent, y, width as u32, &line, style);
            self.row += 1;
        }
    }

    /// A marker followed by text wrapped under its own hanging indent.
    fn bullet(&mut self, marker: &str, marker_style: Style, text: &str, style: Style) {
        if self.is_full() {
            return;
        }
        let y = self.rect.y + self.row;
        let indent = marker.width() as u32;
        self.buf
            .draw_text_clipped(self.rect.x, y, self.rect.width, marker, marker_style);
        self.wrapped_indent(text, style, indent);
    }

    fn blank(&mut self) {
        self.row += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bar_shows_path() {
        let mut buf = Buffer::new(30, 1);
        draw_title_bar(&mut buf, &Theme::default(), "~/showcase/home");
        assert_eq!(buf.to_text(), " ● ● ●  ~/showcase/home");
        assert_eq!(buf.get(29, 0).unwrap().bg, Theme::default().panel);
    }

    #[test]
    fn test_pen_stops_at_bottom() {
        let mut buf = Buffer::new(6, 2);
        let area = buf.area();
        let mut pen = Pen::new(&mut buf, area);
        pen.line("one", Style::NONE);
        pen.wrapped("two three four", Style::NONE);
        pen.line("five", Style::NONE);
        assert!(pen.is_full());
        assert_eq!(buf.to_text(), "one\ntwo");
    }

    #[test]
    fn test_spans_share_a_row() {
        let mut buf = Buffer::new(8, 1);
        let area = buf.area();
        let mut pen = Pen::new(&mut buf, area);
        pen.spans(&[("ab", Style::NONE), ("cdefghij", Style::NONE)]);
        assert_eq!(buf.to_text(), "abcdefgh");
    }

    #[test]
    fn test_bullet_hangs_indent() {
        let mut buf = Buffer::new(10, 3);
        let area = buf.area();
        let mut pen = Pen::new(&mut buf, area);
        pen.bullet("- ", Style::NONE, "alpha beta gamma", Style::NONE);
        assert_eq!(buf.to_text(), "- alpha\n  beta\n  gamma");
    }
}
