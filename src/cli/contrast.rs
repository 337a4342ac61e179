//! Contrast command implementation.

use clap::Args;
use serde::Serialize;

use super::OutputFormat;
use crate::error::{Result, SwatchError};
use crate::output::Printer;
use crate::types::{Colour, ComplianceTier, ContrastResult};

/// Check the WCAG contrast ratio between two colours
#[derive(Args, Debug)]
pub struct ContrastArgs {
    /// First colour as #RRGGBB
    #[arg(required = true)]
    pub first: String,

    /// Second colour as #RRGGBB
    #[arg(required = true)]
    pub second: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct Report {
    ratio: f64,
    tier: ComplianceTier,
    passes: bool,
}

pub fn run(args: ContrastArgs, printer: &Printer) -> Result<()> {
    let first = Colour::from_hex(&args.first)?;
    let second = Colour::from_hex(&args.second)?;
    let result = ContrastResult::between(first, second);

    print!("{}", render(&args, &result, printer)?);

    printer.status("Checked", &format!("{} against {}", first, second));

    Ok(())
}

/// Render a contrast result for stdout.
pub fn render(args: &ContrastArgs, result: &ContrastResult, printer: &Printer) -> Result<String> {
    match args.format {
        OutputFormat::Json => {
            let report = Report {
                ratio: result.ratio,
                tier: result.tier,
                passes: result.passes(),
            };
            let mut json = serde_json::to_string_pretty(&report).map_err(|e| SwatchError::Output {
                message: e.to_string(),
            })?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(format!(
            "Contrast Ratio ({} vs {}): {:.2}\n  {}\n",
            args.first,
            args.second,
            result.ratio,
            printer.tier(result.tier),
        )),
    }
}
