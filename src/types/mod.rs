//! Core domain types for swatch.
//!
//! This module contains the colour model and the two computations built on it:
//! - `Colour` - opaque sRGB values with hex encoding and relative luminance
//! - `Hsl` - hue/saturation/lightness view of a colour
//! - `Palette` - eleven-stop tonal scales
//! - `ContrastResult` - WCAG contrast ratio and compliance tier

mod colour;
mod contrast;
mod hsl;
mod palette;

pub use colour::Colour;
pub use contrast::{contrast_ratio, ComplianceTier, ContrastResult};
pub use hsl::Hsl;
pub use palette::{Palette, Stop, STOPS};
