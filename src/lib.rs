//! swatch - Tonal palettes and WCAG contrast checks
//!
//! A library for deriving design-system colour scales from a single base
//! colour and scoring the contrast between two colours.

pub mod cli;
pub mod error;
pub mod output;
pub mod types;

pub use error::{Result, SwatchError};
pub use types::{contrast_ratio, Colour, ComplianceTier, ContrastResult, Hsl, Palette, Stop, STOPS};

/// Generate the eleven-stop palette for a hex colour.
pub fn generate_palette(hex: &str) -> Result<Palette> {
    Palette::generate(Colour::from_hex(hex)?)
}

/// Score the contrast between two hex colours.
pub fn compute_contrast(a: &str, b: &str) -> Result<ContrastResult> {
    let a = Colour::from_hex(a)?;
    let b = Colour::from_hex(b)?;
    Ok(ContrastResult::between(a, b))
}
