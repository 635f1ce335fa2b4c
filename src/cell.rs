//! A single screen position.
//!
//! Wide graphemes (CJK, most emoji) take two columns. The cell holding the
//! grapheme reports width 2 and the column after it holds a
//! [`CellContent::Continuation`] marker that produces no output.

use crate::color::Rgb;
use crate::style::{Style, TextAttributes};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// What a cell displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CellContent {
    /// Blank; renders as a space.
    #[default]
    Empty,
    Char(char),
    /// Multi-codepoint grapheme cluster.
    Grapheme(Box<str>),
    /// Right half of a wide grapheme.
    Continuation,
}

impl CellContent {
    #[must_use]
    pub fn display_width(&self) -> usize {
        match self {
            Self::Empty => 1,
            Self::Char(c) => unicode_width::UnicodeWidthChar::width(*c).unwrap_or(1).max(1),
            Self::Grapheme(g) => g.width().max(1),
            Self::Continuation => 0,
        }
    }
}

/// Content plus resolved colors and attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub content: CellContent,
    pub fg: Rgb,
    pub bg: Rgb,
    pub attributes: TextAttributes,
}

impl Default for Cell {
    fn default() -> Self {
        Self::clear(Rgb::BLACK)
    }
}

impl Cell {
    /// A cell showing `grapheme`. Unset style colors fall back to white on
    /// black; [`crate::Buffer`] resolves them against the existing cell
    /// before calling this.
    #[must_use]
    pub fn from_grapheme(grapheme: &str, style: Style) -> Self {
        let mut chars = grapheme.chars();
        let content = match (chars.next(), chars.next()) {
            (None, _) => CellContent::Empty,
            (Some(c), None) => CellContent::Char(c),
            _ => CellContent::Grapheme(grapheme.into()),
        };
        Self {
            content,
            fg: style.fg.unwrap_or(Rgb::WHITE),
            bg: style.bg.unwrap_or(Rgb::BLACK),
            attributes: style.attributes,
        }
    }

    #[must_use]
    pub fn new(ch: char, style: Style) -> Self {
        Self {
            content: CellContent::Char(ch),
            fg: style.fg.unwrap_or(Rgb::WHITE),
            bg: style.bg.unwrap_or(Rgb::BLACK),
            attributes: style.attributes,
        }
    }

    /// A blank cell on `bg`.
    #[must_use]
    pub const fn clear(bg: Rgb) -> Self {
        Self {
            content: CellContent::Empty,
            fg: Rgb::WHITE,
            bg,
            attributes: TextAttributes::empty(),
        }
    }

    #[must_use]
    pub const fn continuation(bg: Rgb) -> Self {
        Self {
            content: CellContent::Continuation,
            fg: Rgb::WHITE,
            bg,
            attributes: TextAttributes::empty(),
        }
    }

    #[must_use]
    pub fn display_width(&self) -> usize {
        self.content.display_width()
    }

    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.content == CellContent::Continuation
    }

    /// Append the visible text of this cell to `out`.
    pub fn push_str_to(&self, out: &mut String) {
        match &self.content {
            CellContent::Empty => out.push(' '),
            CellContent::Char(c) => out.push(*c),
            CellContent::Grapheme(g) => out.push_str(g),
            CellContent::Continuation => {}
        }
    }

    /// Write the visible text of this cell.
    pub fn write_content<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match &self.content {
            CellContent::Empty => w.write_all(b" "),
            CellContent::Char(c) => {
                let mut utf8 = [0u8; 4];
                w.write_all(c.encode_utf8(&mut utf8).as_bytes())
            }
            CellContent::Grapheme(g) => w.write_all(g.as_bytes()),
            CellContent::Continuation => Ok(()),
        }
    }
}
