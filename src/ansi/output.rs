//! Buffered ANSI output writer with state tracking.

use crate::ansi::{self, ColorMode};
use crate::cell::Cell;
use crate::color::Rgb;
use crate::style::TextAttributes;
use std::io::{self, Write};

/// Accumulates cells into one byte buffer, emitting SGR changes only when
/// the pen actually changes.
pub struct AnsiWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,
    color_mode: ColorMode,

    current_fg: Option<Rgb>,
    current_bg: Option<Rgb>,
    current_attrs: TextAttributes,

    // None until the first explicit move.
    cursor: Option<(u32, u32)>,
}

impl<W: Write> AnsiWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::TrueColor)
    }

    pub fn with_color_mode(writer: W, color_mode: ColorMode) -> Self {
        Self {
            writer,
            buffer: Vec::with_capacity(8192),
            color_mode,
            current_fg: None,
            current_bg: None,
            current_attrs: TextAttributes::empty(),
            cursor: None,
        }
    }

    #[must_use]
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Move to `(row, col)` unless the cursor is already there.
    pub fn move_cursor(&mut self, row: u32, col: u32) {
        if self.cursor == Some((row, col)) {
            return;
        }
        let _ = ansi::write_cursor_position(&mut self.buffer, row, col);
        self.cursor = Some((row, col));
    }

    fn set_attributes(&mut self, attrs: TextAttributes) {
        if self.current_attrs == attrs {
            return;
        }
        // Dropping an attribute goes through a full reset; colors must be
        // re-sent afterwards.
        if !(self.current_attrs - attrs).is_empty() {
            self.write_str(ansi::RESET);
            self.current_fg = None;
            self.current_bg = None;
            self.current_attrs = TextAttributes::empty();
        }
        let _ = ansi::write_attributes(&mut self.buffer, attrs - self.current_attrs);
        self.current_attrs = attrs;
    }

    fn set_fg(&mut self, color: Rgb) {
        if self.current_fg != Some(color) {
            let _ = ansi::write_fg(&mut self.buffer, color, self.color_mode);
            self.current_fg = Some(color);
        }
    }

    fn set_bg(&mut self, color: Rgb) {
        if self.current_bg != Some(color) {
            let _ = ansi::write_bg(&mut self.buffer, color, self.color_mode);
            self.current_bg = Some(color);
        }
    }

    /// Write `cell` at the cursor and advance by its width.
    pub fn write_cell(&mut self, cell: &Cell) {
        if cell.is_continuation() {
            return;
        }
        self.set_attributes(cell.attributes);
        self.set_fg(cell.fg);
        self.set_bg(cell.bg);
        let _ = cell.write_content(&mut self.buffer);
        if let Some((row, col)) = self.cursor {
            let width = u32::try_from(cell.display_width()).unwrap_or(1);
            self.cursor = Some((row, col + width));
        }
    }

    /// Emit SGR reset and forget the pen state.
    pub fn reset(&mut self) {
        self.write_str(ansi::RESET);
        self.current_fg = None;
        self.current_bg = None;
        self.current_attrs = TextAttributes::empty();
    }

    /// Bytes buffered so far.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Hand the buffered bytes to the inner writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.write_all(&self.buffer)?;
        self.buffer.clear();
        self.writer.flush()
    }
}
