// ABOUTME: Color model with named colors and hex values for wardrobe items
// ABOUTME: Provides hex parsing into RGB; color harmony math lives in the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

use serde::{Deserialize, Serialize};

/// A named garment color with its hex value
///
/// The name is what users see ("burgundy", "navy"); the hex value is what the
/// harmony scoring operates on. Hex values use the `#rrggbb` form; the leading
/// `#` is optional on input and normalized on construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Color {
    /// Display name (e.g., "navy", "off-white")
    pub name: String,
    /// Hex value in `#rrggbb` form
    pub hex: String,
}

impl Color {
    /// Create a color, normalizing the hex value to `#rrggbb`
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        let hex = hex.into();
        let normalized = if hex.starts_with('#') {
            hex.to_lowercase()
        } else {
            format!("#{}", hex.to_lowercase())
        };
        Self {
            name: name.into(),
            hex: normalized,
        }
    }

    /// Parse the hex value into RGB components
    ///
    /// Returns `None` when the hex value is not a valid `#rrggbb` string.
    #[must_use]
    pub fn rgb(&self) -> Option<Rgb> {
        Rgb::parse_hex(&self.hex)
    }

    /// True when the hex value parses as `#rrggbb`
    #[must_use]
    pub fn is_valid_hex(&self) -> bool {
        self.rgb().is_some()
    }
}

/// RGB components of a parsed color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create from channel values
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `rrggbb` hex string
    #[must_use]
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::parse_hex("#1a2b3c"), Some(Rgb::new(0x1a, 0x2b, 0x3c)));
        assert_eq!(Rgb::parse_hex("1a2b3c"), Some(Rgb::new(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Rgb::parse_hex("#12345"), None);
        assert_eq!(Rgb::parse_hex("#1234567"), None);
        assert_eq!(Rgb::parse_hex("#gg0000"), None);
        assert_eq!(Rgb::parse_hex(""), None);
    }

    #[test]
    fn normalizes_hex_on_construction() {
        let color = Color::new("Navy", "1F2A44");
        assert_eq!(color.hex, "#1f2a44");
        assert!(color.is_valid_hex());
    }
}
