use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourParseError {
    #[error("colour '{0}' must be six hex digits, optionally prefixed with '#'")]
    InvalidFormat(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };
    pub const WHITE: Colour = Colour { r: 255, g: 255, b: 255 };
    pub const RED: Colour = Colour { r: 255, g: 0, b: 0 };
    pub const GREEN: Colour = Colour { r: 0, g: 255, b: 0 };
    pub const BLUE: Colour = Colour { r: 0, g: 0, b: 255 };

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the channels as `0xRRGGBB`.
    #[must_use]
    pub fn to_rgb_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Bits above the low 24 are ignored.
    #[must_use]
    pub fn from_rgb_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }
}

impl FromStr for Colour {
    type Err = ColourParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColourParseError::InvalidFormat(s.to_string()));
        }

        u32::from_str_radix(hex, 16)
            .map(Self::from_rgb_u32)
            .map_err(|_| ColourParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_round_trips_named_colours() {
        assert_eq!(Colour::BLUE.to_rgb_u32(), 0x0000ff);
        assert_eq!(Colour::from_rgb_u32(0xff0000), Colour::RED);
        assert_eq!(Colour::from_rgb_u32(0xff00_0000), Colour::BLACK);
    }

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!("#ffffff".parse::<Colour>(), Ok(Colour::WHITE));
        assert_eq!("12aB3c".parse::<Colour>(), Ok(Colour::new(0x12, 0xab, 0x3c)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("#fff".parse::<Colour>().is_err());
        assert!("zzzzzz".parse::<Colour>().is_err());
        assert!("+12345".parse::<Colour>().is_err());
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Colour::new(0x12, 0xab, 0x3c).to_string(), "#12ab3c");
    }
}
