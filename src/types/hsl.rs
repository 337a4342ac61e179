//! HSL representation and conversion to and from RGB.

use palette::{Hsl as PaletteHsl, IntoColor, Srgb};

use crate::error::Result;

use super::Colour;

/// A colour in hue-saturation-lightness form.
///
/// `hue` is in degrees (`0.0..360.0`); `saturation` and `lightness` are
/// in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert an integer colour to HSL.
    pub fn from_colour(colour: Colour) -> Self {
        Self::from_unit_rgb(colour.to_unit())
    }

    /// Convert unit-scale RGB channels to HSL.
    pub fn from_unit_rgb(channels: [f32; 3]) -> Self {
        let [r, g, b] = channels;
        let rgb: Srgb<f32> = Srgb::new(r, g, b);
        let hsl: PaletteHsl = rgb.into_color();

        Self {
            hue: hsl.hue.into_positive_degrees(),
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    /// Convert to unit-scale RGB channels, without rounding.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        let hsl: PaletteHsl = PaletteHsl::new(self.hue, self.saturation, self.lightness);
        let rgb: Srgb<f32> = hsl.into_color();
        [rgb.red, rgb.green, rgb.blue]
    }

    /// Convert to an integer colour, rounding each channel.
    pub fn to_colour(self) -> Result<Colour> {
        Colour::from_unit(self.to_unit_rgb())
    }

    /// Same hue and saturation, different lightness.
    pub fn with_lightness(self, lightness: f32) -> Self {
        Self { lightness, ..self }
    }
}
