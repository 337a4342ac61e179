//! Terminal output formatting for the swatch CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs.
//! All status output goes to stderr; stdout is reserved for results.

use std::io::{self, IsTerminal, Write};

use crate::types::ComplianceTier;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Prints Cargo-style status lines to stderr with optional ANSI colours.
/// Colour is enabled per stream when that stream is a terminal.
#[derive(Debug)]
pub struct Printer {
    color: bool,
    stdout_color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new(quiet: bool) -> Self {
        Self {
            color: io::stderr().is_terminal(),
            stdout_color: io::stdout().is_terminal(),
            quiet,
        }
    }

    /// Printer with colour off on both streams.
    pub fn plain(quiet: bool) -> Self {
        Self {
            color: false,
            stdout_color: false,
            quiet,
        }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "   Generated 11 stops from #3366cc"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Format a compliance tier label for stdout, coloured by severity.
    pub fn tier(&self, tier: ComplianceTier) -> String {
        let label = tier.label();
        if !self.stdout_color {
            return label.to_string();
        }
        let color = match tier {
            ComplianceTier::AaaNormal | ComplianceTier::AaNormalOrAaaLarge => GREEN,
            ComplianceTier::AaLargeOnly => YELLOW,
            ComplianceTier::Fail => RED,
        };
        format!("{BOLD}{color}{label}{RESET}")
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        if self.quiet {
            return;
        }
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Pluralize a count: `plural(1, "stop", "stops")` → "1 stop".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_singular() {
        assert_eq!(plural(1, "stop", "stops"), "1 stop");
    }

    #[test]
    fn test_plural_many() {
        assert_eq!(plural(11, "stop", "stops"), "11 stops");
    }

    #[test]
    fn test_tier_plain() {
        let printer = Printer::plain(false);
        assert_eq!(printer.tier(ComplianceTier::Fail), "❌ Fail");
    }

    #[test]
    fn test_tier_coloured() {
        let printer = Printer {
            color: false,
            stdout_color: true,
            quiet: false,
        };
        let label = printer.tier(ComplianceTier::AaLargeOnly);
        assert!(label.starts_with(BOLD));
        assert!(label.contains(YELLOW));
        assert!(label.ends_with(RESET));
    }
}
