//! 24-bit terminal colors.
//!
//! [`Rgb`] is a plain opaque color. The renderer writes it as a true-color
//! SGR sequence or, for terminals that only know the xterm palette, maps it
//! to the nearest 256-color index.
//!
//! ```
//! use termfolio::Rgb;
//!
//! let bg = Rgb::from_hex("#1a1b26").unwrap();
//! assert_eq!(bg, Rgb::new(0x1a, 0x1b, 0x26));
//! assert_eq!(Rgb::WHITE.to_256_color(), 255);
//! ```

use std::fmt;

/// Opaque RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (slot, digit) in channels.iter_mut().zip(hex.chars()) {
                    let v = u8::try_from(digit.to_digit(16)?).ok()?;
                    *slot = v * 17;
                }
                Some(Self::new(channels[0], channels[1], channels[2]))
            }
            6 => {
                let packed = u32::from_str_radix(hex, 16).ok()?;
                Some(Self::from_u32(packed))
            }
            _ => None,
        }
    }

    /// Nearest index in the xterm 256-color palette.
    ///
    /// Near-gray colors map onto the 24-step gray ramp (232-255), everything
    /// else onto the 6x6x6 cube (16-231).
    #[must_use]
    pub fn to_256_color(self) -> u8 {
        let (r, g, b) = (i16::from(self.r), i16::from(self.g), i16::from(self.b));
        let gray = (r + g + b) / 3;
        if (r - gray).abs() < 10 && (g - gray).abs() < 10 && (b - gray).abs() < 10 {
            let step = u8::try_from(gray * 24 / 256).unwrap_or(23);
            return 232 + step.min(23);
        }
        16 + 36 * cube_index(self.r) + 6 * cube_index(self.g) + cube_index(self.b)
    }
}

// Cube levels are 0, 95, 135, 175, 215, 255; split at the midpoints.
const fn cube_index(v: u8) -> u8 {
    match v {
        0..=47 => 0,
        48..=114 => 1,
        115..=154 => 2,
        155..=194 => 3,
        195..=234 => 4,
        _ => 5,
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(Rgb::from_hex("#7aa2f7"), Some(Rgb::new(0x7a, 0xa2, 0xf7)));
        assert_eq!(Rgb::from_hex("7AA2F7"), Some(Rgb::new(0x7a, 0xa2, 0xf7)));
        assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#gggggg"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    #[test]
    fn test_256_palette_corners() {
        assert_eq!(Rgb::BLACK.to_256_color(), 232);
        assert_eq!(Rgb::WHITE.to_256_color(), 255);
        assert_eq!(Rgb::new(255, 0, 0).to_256_color(), 196);
        assert_eq!(Rgb::new(0, 0, 255).to_256_color(), 21);
    }

    #[test]
    fn test_display_is_lower_hex() {
        assert_eq!(Rgb::from_u32(0x00f7_768e).to_string(), "#f7768e");
    }

    proptest! {
        #[test]
        fn prop_hex_display_roundtrips(r: u8, g: u8, b: u8) {
            let color = Rgb::new(r, g, b);
            prop_assert_eq!(Rgb::from_hex(&color.to_string()), Some(color));
        }

        #[test]
        fn prop_256_color_is_never_basic(r: u8, g: u8, b: u8) {
            prop_assert!(Rgb::new(r, g, b).to_256_color() >= 16);
        }
    }
}
