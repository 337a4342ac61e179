//! Tonal palette generation.
//!
//! A palette is eleven stops, keyed by the usual design-system weights
//! (50 through 950). Each stop keeps the base colour's hue and saturation
//! and swaps in a fixed lightness from [`STOPS`], so the base colour's own
//! lightness has no effect on the result.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;

use super::{Colour, Hsl};

/// Stop weight and its target lightness, lightest first.
pub const STOPS: [(u16, f32); 11] = [
    (50, 0.95),
    (100, 0.90),
    (200, 0.80),
    (300, 0.70),
    (400, 0.60),
    (500, 0.50),
    (600, 0.40),
    (700, 0.30),
    (800, 0.20),
    (900, 0.10),
    (950, 0.05),
];

/// A single palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop {
    pub weight: u16,
    pub colour: Colour,
}

/// An eleven-stop tonal scale derived from one base colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    base: Colour,
    stops: Vec<Stop>,
}

impl Palette {
    /// Generate a palette from a base colour.
    pub fn generate(base: Colour) -> Result<Self> {
        let hsl = Hsl::from_colour(base);

        let stops = STOPS
            .iter()
            .map(|&(weight, lightness)| {
                let colour = hsl.with_lightness(lightness).to_colour()?;
                Ok(Stop { weight, colour })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { base, stops })
    }

    /// The colour the palette was generated from.
    pub fn base(&self) -> Colour {
        self.base
    }

    /// All stops in ascending weight order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Get the colour for a weight.
    pub fn get(&self, weight: u16) -> Option<Colour> {
        self.stops
            .iter()
            .find(|stop| stop.weight == weight)
            .map(|stop| stop.colour)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    /// Get the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Stop;
    type IntoIter = std::slice::Iter<'a, Stop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}

// Serialized as {"50": "#ebf0fa", "100": ...} in weight order.
impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stops.len()))?;
        for stop in &self.stops {
            map.serialize_entry(&stop.weight.to_string(), &stop.colour)?;
        }
        map.end()
    }
}
