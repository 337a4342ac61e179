//! Palette command implementation.
//!
//! Prints the eleven stops of a tonal palette, optionally with each stop's
//! contrast against white and black.

use std::fmt::Write as _;

use clap::Args;

use super::OutputFormat;
use crate::error::{Result, SwatchError};
use crate::output::{plural, Printer};
use crate::types::{contrast_ratio, Colour, Palette};

/// Generate an 11-stop tonal palette from a base colour
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Base colour as #RRGGBB
    #[arg(required = true)]
    pub colour: String,

    /// Show each stop's contrast against white and black
    #[arg(long)]
    pub contrast: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let base = Colour::from_hex(&args.colour)?;
    let palette = Palette::generate(base)?;

    print!("{}", render(&args, &palette)?);

    printer.status(
        "Generated",
        &format!("{} from {}", plural(palette.len(), "stop", "stops"), base),
    );

    Ok(())
}

/// Render the palette for stdout.
pub fn render(args: &PaletteArgs, palette: &Palette) -> Result<String> {
    match args.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(palette).map_err(|e| SwatchError::Output {
                message: e.to_string(),
            })?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let mut out = format!("Generating palette for {}:\n", args.colour);
            for stop in palette {
                // Writing to a String cannot fail
                let _ = write!(out, "  {}: {}", stop.weight, stop.colour);
                if args.contrast {
                    let _ = write!(
                        out,
                        "  (white {:.2}, black {:.2})",
                        contrast_ratio(stop.colour, Colour::WHITE),
                        contrast_ratio(stop.colour, Colour::BLACK),
                    );
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}
