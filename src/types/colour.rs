//! Colour type, hex parsing and encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Result, SwatchError};

/// An opaque sRGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Accepts exactly six hex digits (`RRGGBB`), optionally prefixed with
    /// `#`, in either case.
    pub fn from_hex(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(SwatchError::MalformedColour {
                input: s.to_string(),
                message: format!("invalid hex digit: {}", bad),
                help: Some("Use digits 0-9 and a-f, e.g. #3366cc".to_string()),
            });
        }

        if hex.len() != 6 {
            return Err(SwatchError::MalformedColour {
                input: s.to_string(),
                message: format!("expected 6 hex digits, found {}", hex.len()),
                help: Some("Use #RRGGBB format".to_string()),
            });
        }

        Ok(Self::rgb(
            parse_hex_byte(s, &hex[0..2])?,
            parse_hex_byte(s, &hex[2..4])?,
            parse_hex_byte(s, &hex[4..6])?,
        ))
    }

    /// Build a colour from unit-scale channels (`0.0..=1.0`).
    ///
    /// Channels are scaled to 0-255 and rounded to the nearest integer;
    /// anything that lands outside that range is rejected.
    pub fn from_unit(channels: [f32; 3]) -> Result<Self> {
        let [r, g, b] = channels;
        Ok(Self::rgb(
            unit_to_byte(r)?,
            unit_to_byte(g)?,
            unit_to_byte(b)?,
        ))
    }

    /// Canonical `#rrggbb` form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// WCAG 2.x relative luminance, in `0.0..=1.0`.
    pub fn relative_luminance(self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl FromStr for Colour {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a two-character hex byte.
fn parse_hex_byte(input: &str, s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16)
        .map_err(|_| SwatchError::malformed(input, format!("invalid hex byte: {}", s)))
}

fn unit_to_byte(channel: f32) -> Result<u8> {
    let scaled = (channel * 255.0).round();
    if !scaled.is_finite() || !(0.0..=255.0).contains(&scaled) {
        return Err(SwatchError::MalformedColour {
            input: format!("{}", channel),
            message: format!("channel out of range after rounding: {}", scaled),
            help: None,
        });
    }
    Ok(scaled as u8)
}

/// sRGB channel to linear light, using the WCAG 2.x breakpoint.
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
