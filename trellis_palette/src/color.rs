// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opaque 8-bit sRGB colors and hex literal parsing.

use core::fmt;
use core::str::FromStr;

/// An opaque 8-bit sRGB color.
///
/// Displays as a lowercase `#rrggbb` literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` value; the top byte is ignored.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "each channel is masked to a byte first"
    )]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        )
    }

    /// Parses a hex literal: an optional `#` followed by 3, 4, 6, or 8 hex digits.
    ///
    /// Matching is case-insensitive. The alpha digits of the 4- and 8-digit forms
    /// are validated and then discarded.
    ///
    /// ```
    /// use trellis_palette::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#4594E3"), Ok(Rgb::new(0x45, 0x94, 0xe3)));
    /// assert_eq!(Rgb::from_hex("fff"), Ok(Rgb::WHITE));
    /// assert!(Rgb::from_hex("#zzz").is_err());
    /// ```
    pub fn from_hex(literal: &str) -> Result<Self, ParseHexError> {
        let digits = literal.strip_prefix('#').unwrap_or(literal);
        let bytes = digits.as_bytes();
        let mut nibbles = [0_u8; 8];
        if !matches!(bytes.len(), 3 | 4 | 6 | 8) {
            return Err(ParseHexError::Length(bytes.len()));
        }
        for (slot, &byte) in nibbles.iter_mut().zip(bytes) {
            *slot = hex_value(byte).ok_or(ParseHexError::Digit(char::from(byte)))?;
        }
        let color = match bytes.len() {
            3 | 4 => Self::new(nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17),
            _ => Self::new(
                (nibbles[0] << 4) | nibbles[1],
                (nibbles[2] << 4) | nibbles[3],
                (nibbles[4] << 4) | nibbles[5],
            ),
        };
        Ok(color)
    }

    /// Channels as unit-interval floats.
    #[must_use]
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Error returned when a string is not a valid hex color literal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseHexError {
    /// The literal does not have 3, 4, 6, or 8 digits.
    #[error("hex color must have 3, 4, 6, or 8 digits, found {0}")]
    Length(usize),
    /// The literal contains a character that is not a hex digit.
    #[error("invalid hex digit {0:?}")]
    Digit(char),
}

/// A paint value for borders: either a solid color or nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Nothing is painted (`transparent`).
    Transparent,
    /// A solid color.
    Solid(Rgb),
}

impl Paint {
    /// The solid color, if any.
    #[must_use]
    pub const fn solid(self) -> Option<Rgb> {
        match self {
            Self::Transparent => None,
            Self::Solid(color) => Some(color),
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str("transparent"),
            Self::Solid(color) => fmt::Display::fmt(color, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parses_all_literal_lengths() {
        assert_eq!(Rgb::from_hex("#abc"), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::from_hex("#abcd"), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Rgb::from_hex("#A1B2C3"), Ok(Rgb::new(0xa1, 0xb2, 0xc3)));
        assert_eq!(Rgb::from_hex("a1b2c380"), Ok(Rgb::new(0xa1, 0xb2, 0xc3)));
    }

    #[test]
    fn rejects_bad_literals() {
        assert_eq!(Rgb::from_hex("#zzz"), Err(ParseHexError::Digit('z')));
        assert_eq!(Rgb::from_hex("#12345"), Err(ParseHexError::Length(5)));
        assert_eq!(Rgb::from_hex("#1234567"), Err(ParseHexError::Length(7)));
        assert_eq!(Rgb::from_hex(""), Err(ParseHexError::Length(0)));
        assert_eq!(Rgb::from_hex("##fff"), Err(ParseHexError::Digit('#')));
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(Rgb::from_u32(0x4594E3).to_string(), "#4594e3");
        assert_eq!(Paint::Transparent.to_string(), "transparent");
        assert_eq!(Paint::Solid(Rgb::WHITE).to_string(), "#ffffff");
    }
}
