//! Boxes and wrapped paragraphs.

use crate::buffer::{Buffer, ClipRect};
use crate::cell::Cell;
use crate::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Border glyphs plus the style they are drawn in.
#[derive(Clone, Copy, Debug)]
pub struct BoxStyle {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub style: Style,
}

impl BoxStyle {
    #[must_use]
    pub const fn single(style: Style) -> Self {
        Self {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
            style,
        }
    }

    #[must_use]
    pub const fn rounded(style: Style) -> Self {
        Self {
            top_left: '╭',
            top_right: '╮',
            bottom_left: '╰',
            bottom_right: '╯',
            horizontal: '─',
            vertical: '│',
            style,
        }
    }
}

impl Buffer {
    /// Draw a border around `rect`. An optional title is drawn into the
    /// top edge, two columns in from the corner.
    pub fn draw_box(&mut self, rect: ClipRect, border: &BoxStyle, title: Option<&str>) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;
        let glyph = |buf: &Self, x: u32, y: u32, ch: char| {
            let bg = buf.get(x, y).map(|c| c.bg);
            Cell::new(ch, Style { bg, ..border.style })
        };

        for x in rect.x + 1..right {
            let top = glyph(self, x, rect.y, border.horizontal);
            self.set(x, rect.y, top);
            let bot = glyph(self, x, bottom, border.horizontal);
            self.set(x, bottom, bot);
        }
        for y in rect.y + 1..bottom {
            let left = glyph(self, rect.x, y, border.vertical);
            self.set(rect.x, y, left);
            let side = glyph(self, right, y, border.vertical);
            self.set(right, y, side);
        }
        for (x, y, ch) in [
            (rect.x, rect.y, border.top_left),
            (right, rect.y, border.top_right),
            (rect.x, bottom, border.bottom_left),
            (right, bottom, border.bottom_right),
        ] {
            let corner = glyph(self, x, y, ch);
            self.set(x, y, corner);
        }

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            let room = rect.width.saturating_sub(4);
            if room > 2 {
                let label = format!(" {title} ");
                self.draw_text_clipped(rect.x + 2, rect.y, room, &label, border.style);
            }
        }
    }

    /// Word-wrap `text` into `rect`, one wrapped line per row. Stops at the
    /// bottom of `rect`; returns the number of rows written.
    pub fn draw_wrapped(&mut self, rect: ClipRect, text: &str, style: Style) -> u32 {
        let mut rows = 0;
        for line in wrap_text(text, rect.width as usize) {
            if rows >= rect.height {
                break;
            }
            self.draw_text_clipped(rect.x, rect.y + rows, rect.width, &line, style);
            rows += 1;
        }
        rows
    }
}

/// Greedy word wrap measured in terminal columns.
///
/// Explicit newlines start a new line; words longer than `width` are split
/// at grapheme boundaries. A zero width yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(line_width > 0);
            if line_width + gap + word_width <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += gap + word_width;
                continue;
            }
            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            for grapheme in word.graphemes(true) {
                let w = grapheme.width();
                if line_width + w > width && line_width > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push_str(grapheme);
                line_width += w;
            }
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_wrap_greedy() {
        assert_eq!(wrap_text("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_splits_long_words_and_keeps_newlines() {
        assert_eq!(wrap_text("abcdefgh\nxy", 3), vec!["abc", "def", "gh", "xy"]);
        assert_eq!(wrap_text("", 5), vec![""]);
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn test_draw_box_with_title() {
        let mut buf = Buffer::new(12, 3);
        buf.draw_box(buf.area(), &BoxStyle::single(Style::NONE), Some("ls"));
        assert_eq!(buf.to_text(), "┌─ ls ─────┐\n│          │\n└──────────┘");
    }

    #[test]
    fn test_box_keeps_panel_background() {
        let mut buf = Buffer::new(4, 3);
        let panel = Rgb::new(9, 9, 9);
        buf.clear(panel);
        buf.draw_box(buf.area(), &BoxStyle::rounded(Style::fg(Rgb::WHITE)), None);
        assert_eq!(buf.get(0, 0).unwrap().bg, panel);
    }

    #[test]
    fn test_draw_wrapped_stops_at_bottom() {
        let mut buf = Buffer::new(5, 2);
        let rows = buf.draw_wrapped(buf.area(), "aa bb cc dd", Style::NONE);
        assert_eq!(rows, 2);
        assert_eq!(buf.to_text(), "aa bb\ncc dd");
    }
}
