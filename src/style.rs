//! Text styling: colors plus SGR attributes.
//!
//! `None` colors inherit from whatever the cell already had, so a style with
//! only a foreground can be drawn over a filled panel without punching holes
//! in its background.

use crate::color::Rgb;
use bitflags::bitflags;

bitflags! {
    /// SGR text attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        const BOLD      = 0x01;
        const DIM       = 0x02;
        const ITALIC    = 0x04;
        const UNDERLINE = 0x08;
        const INVERSE   = 0x10;
    }
}

/// Colors and attributes applied to drawn text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub attributes: TextAttributes,
}

impl Style {
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    #[must_use]
    pub const fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn bg(color: Rgb) -> Self {
        Self {
            bg: Some(color),
            ..Self::NONE
        }
    }

    #[must_use]
    pub const fn with_fg(self, color: Rgb) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    #[must_use]
    pub const fn with_bg(self, color: Rgb) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    #[must_use]
    pub const fn with_attributes(self, attributes: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attributes),
            ..self
        }
    }

    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    #[must_use]
    pub const fn with_dim(self) -> Self {
        self.with_attributes(TextAttributes::DIM)
    }

    #[must_use]
    pub const fn with_underline(self) -> Self {
        self.with_attributes(TextAttributes::UNDERLINE)
    }

    #[must_use]
    pub const fn with_inverse(self) -> Self {
        self.with_attributes(TextAttributes::INVERSE)
    }

    /// Overlay `other` on top of `self`: set colors win, attributes combine.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_stack() {
        let style = Style::fg(Rgb::WHITE).with_bold().with_underline();
        assert_eq!(style.fg, Some(Rgb::WHITE));
        assert_eq!(style.bg, None);
        assert!(style.attributes.contains(TextAttributes::BOLD | TextAttributes::UNDERLINE));
    }

    #[test]
    fn test_merge_prefers_overlay_colors() {
        let base = Style::fg(Rgb::WHITE).with_bg(Rgb::BLACK).with_dim();
        let merged = base.merge(Style::fg(Rgb::new(1, 2, 3)).with_bold());
        assert_eq!(merged.fg, Some(Rgb::new(1, 2, 3)));
        assert_eq!(merged.bg, Some(Rgb::BLACK));
        assert_eq!(merged.attributes, TextAttributes::DIM | TextAttributes::BOLD);
    }
}
