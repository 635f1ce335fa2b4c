//! Terminal color palette.

use crate::color::Rgb;
use crate::style::Style;

/// Named colors used by both views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub panel: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub highlight: Rgb,
    pub green: Rgb,
    pub purple: Rgb,
    pub error: Rgb,
    pub warning: Rgb,
}

impl Theme {
    /// Tokyo Night, the palette the portfolio was designed around.
    pub const TOKYO_NIGHT: Self = Self {
        background: Rgb::from_u32(0x001a_1b26),
        panel: Rgb::from_u32(0x0024_283b),
        border: Rgb::from_u32(0x0041_4868),
        text: Rgb::from_u32(0x00a9_b1d6),
        muted: Rgb::from_u32(0x0056_5f89),
        highlight: Rgb::from_u32(0x007a_a2f7),
        green: Rgb::from_u32(0x009e_ce6a),
        purple: Rgb::from_u32(0x00bb_9af7),
        error: Rgb::from_u32(0x00f7_768e),
        warning: Rgb::from_u32(0x00e0_af68),
    };

    #[must_use]
    pub const fn text(&self) -> Style {
        Style::fg(self.text)
    }

    #[must_use]
    pub const fn muted(&self) -> Style {
        Style::fg(self.muted)
    }

    #[must_use]
    pub const fn heading(&self) -> Style {
        Style::fg(self.highlight).with_bold()
    }

    #[must_use]
    pub const fn accent(&self) -> Style {
        Style::fg(self.green)
    }

    #[must_use]
    pub const fn label(&self) -> Style {
        Style::fg(self.purple).with_bold()
    }

    #[must_use]
    pub const fn error(&self) -> Style {
        Style::fg(self.error)
    }

    #[must_use]
    pub const fn link(&self) -> Style {
        Style::fg(self.highlight).with_underline()
    }

    /// Selected menu item or tab.
    #[must_use]
    pub const fn selected(&self) -> Style {
        Style::fg(self.background).with_bg(self.highlight).with_bold()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::TOKYO_NIGHT
    }
}
