pub mod completions;
pub mod contrast;
pub mod palette;

use clap::{Parser, Subcommand, ValueEnum};

/// swatch - Tonal palettes and WCAG contrast checks
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an 11-stop tonal palette from a base colour
    Palette(palette::PaletteArgs),

    /// Check the WCAG contrast ratio between two colours
    Contrast(contrast::ContrastArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
