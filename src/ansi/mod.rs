//! ANSI escape sequence generation.
//!
//! Free functions write single SGR or cursor sequences into any
//! [`Write`]; [`AnsiWriter`] strings cells together and only emits the
//! state changes between them.

pub mod output;
pub mod sequences;

pub use output::AnsiWriter;
pub use sequences::*;

use crate::color::Rgb;
use crate::style::TextAttributes;
use std::io::{self, Write};

/// How colors are encoded on the wire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// 24-bit `38;2;r;g;b`.
    #[default]
    TrueColor,
    /// xterm palette `38;5;n`.
    Color256,
    /// No color sequences at all.
    NoColor,
}

impl ColorMode {
    /// Guess from `COLORTERM` and `TERM` values.
    #[must_use]
    pub fn detect(colorterm: Option<&str>, term: Option<&str>) -> Self {
        if matches!(colorterm, Some("truecolor" | "24bit")) {
            return Self::TrueColor;
        }
        match term {
            Some("dumb") => Self::NoColor,
            Some(t) if t.contains("256color") => Self::Color256,
            // Most terminals in use today handle direct color even when
            // they do not advertise it.
            _ => Self::TrueColor,
        }
    }

    /// Parse a `--color` value. `auto` maps to `None`.
    #[must_use]
    pub fn from_flag(value: &str) -> Option<Option<Self>> {
        match value.to_lowercase().as_str() {
            "auto" => Some(None),
            "truecolor" | "24bit" => Some(Some(Self::TrueColor)),
            "256" => Some(Some(Self::Color256)),
            "none" | "never" => Some(Some(Self::NoColor)),
            _ => None,
        }
    }

    /// [`ColorMode::detect`] against the process environment. A non-empty
    /// `NO_COLOR` wins over both.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return Self::NoColor;
        }
        let colorterm = std::env::var("COLORTERM").ok();
        let term = std::env::var("TERM").ok();
        Self::detect(colorterm.as_deref(), term.as_deref())
    }
}

fn write_color(w: &mut impl Write, base: u8, color: Rgb, mode: ColorMode) -> io::Result<()> {
    match mode {
        ColorMode::TrueColor => write!(w, "\x1b[{base};2;{};{};{}m", color.r, color.g, color.b),
        ColorMode::Color256 => write!(w, "\x1b[{base};5;{}m", color.to_256_color()),
        ColorMode::NoColor => Ok(()),
    }
}

/// Foreground SGR.
pub fn write_fg(w: &mut impl Write, color: Rgb, mode: ColorMode) -> io::Result<()> {
    write_color(w, 38, color, mode)
}

/// Background SGR.
pub fn write_bg(w: &mut impl Write, color: Rgb, mode: ColorMode) -> io::Result<()> {
    write_color(w, 48, color, mode)
}

/// SGR for every set attribute, in one sequence. Writes nothing when empty.
pub fn write_attributes(w: &mut impl Write, attrs: TextAttributes) -> io::Result<()> {
    const CODES: [(TextAttributes, &str); 5] = [
        (TextAttributes::BOLD, "1"),
        (TextAttributes::DIM, "2"),
        (TextAttributes::ITALIC, "3"),
        (TextAttributes::UNDERLINE, "4"),
        (TextAttributes::INVERSE, "7"),
    ];
    let codes: Vec<&str> = CODES
        .iter()
        .filter(|(flag, _)| attrs.contains(*flag))
        .map(|(_, code)| *code)
        .collect();
    if codes.is_empty() {
        return Ok(());
    }
    write!(w, "\x1b[{}m", codes.join(";"))
}

/// Absolute cursor move; `row` and `col` are zero-based.
pub fn write_cursor_position(w: &mut impl Write, row: u32, col: u32) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", row + 1, col + 1)
}

/// Set the window title, dropping control characters from `title`.
pub fn write_title(w: &mut impl Write, title: &str) -> io::Result<()> {
    let clean: String = title.chars().filter(|c| !c.is_control()).collect();
    write!(w, "{TITLE_PREFIX}{clean}{TITLE_SUFFIX}")
}
