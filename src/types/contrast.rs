//! WCAG contrast ratio and compliance tiers.

use std::fmt;

use serde::Serialize;

use super::Colour;

/// Contrast ratio between two colours, `(L_max + 0.05) / (L_min + 0.05)`.
///
/// Symmetric in its arguments; ranges from 1.0 (same luminance) to 21.0
/// (black on white).
pub fn contrast_ratio(a: Colour, b: Colour) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG 2.x compliance tier for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceTier {
    /// 7:1 or better
    AaaNormal,
    /// 4.5:1 up to 7:1
    AaNormalOrAaaLarge,
    /// 3:1 up to 4.5:1
    AaLargeOnly,
    Fail,
}

impl ComplianceTier {
    /// Classify a ratio. Each threshold is inclusive on its lower bound.
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 7.0 {
            ComplianceTier::AaaNormal
        } else if ratio >= 4.5 {
            ComplianceTier::AaNormalOrAaaLarge
        } else if ratio >= 3.0 {
            ComplianceTier::AaLargeOnly
        } else {
            ComplianceTier::Fail
        }
    }

    /// Human-readable compliance line.
    pub fn label(self) -> &'static str {
        match self {
            ComplianceTier::AaaNormal => "✅ AAA (Normal Text)",
            ComplianceTier::AaNormalOrAaaLarge => "✅ AA (Normal Text) / AAA (Large Text)",
            ComplianceTier::AaLargeOnly => "⚠️ AA (Large Text Only) / Fail (Normal Text)",
            ComplianceTier::Fail => "❌ Fail",
        }
    }

    /// Whether any WCAG level is met (large text included).
    pub fn passes(self) -> bool {
        self != ComplianceTier::Fail
    }
}

impl fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A contrast ratio together with its compliance tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub tier: ComplianceTier,
}

impl ContrastResult {
    /// Score a pair of colours.
    pub fn between(a: Colour, b: Colour) -> Self {
        let ratio = contrast_ratio(a, b);
        Self {
            ratio,
            tier: ComplianceTier::classify(ratio),
        }
    }

    pub fn passes(&self) -> bool {
        self.tier.passes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Colour {
        Colour::from_hex(s).unwrap()
    }

    #[test]
    fn test_black_on_white_is_21() {
        let ratio = contrast_ratio(Colour::WHITE, Colour::BLACK);
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_colour_is_1() {
        for c in ["#000000", "#ffffff", "#3366cc", "#777777"] {
            assert_eq!(contrast_ratio(hex(c), hex(c)), 1.0);
        }
    }

    #[test]
    fn test_order_independent() {
        let pairs = [
            ("#ff0000", "#ffffff"),
            ("#3366cc", "#ebf0fa"),
            ("#777777", "#888888"),
        ];
        for (a, b) in pairs {
            assert_eq!(contrast_ratio(hex(a), hex(b)), contrast_ratio(hex(b), hex(a)));
        }
    }

    #[test]
    fn test_known_ratios() {
        // Reference values from common WCAG checkers
        assert!((contrast_ratio(hex("#767676"), Colour::WHITE) - 4.54).abs() < 0.01);
        assert!((contrast_ratio(hex("#ff0000"), Colour::WHITE) - 4.00).abs() < 0.01);
        assert!((contrast_ratio(hex("#777777"), hex("#888888")) - 1.26).abs() < 0.01);
    }

    #[test]
    fn test_ratio_in_range() {
        for a in ["#000000", "#123456", "#abcdef", "#ffffff"] {
            for b in ["#010101", "#7f7f7f", "#fedcba"] {
                let r = contrast_ratio(hex(a), hex(b));
                assert!((1.0..=21.0).contains(&r), "{} vs {}: {}", a, b, r);
            }
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(ComplianceTier::classify(7.0), ComplianceTier::AaaNormal);
        assert_eq!(ComplianceTier::classify(6.99), ComplianceTier::AaNormalOrAaaLarge);
        assert_eq!(ComplianceTier::classify(4.5), ComplianceTier::AaNormalOrAaaLarge);
        assert_eq!(ComplianceTier::classify(4.49), ComplianceTier::AaLargeOnly);
        assert_eq!(ComplianceTier::classify(3.0), ComplianceTier::AaLargeOnly);
        assert_eq!(ComplianceTier::classify(2.99), ComplianceTier::Fail);
        assert_eq!(ComplianceTier::classify(1.0), ComplianceTier::Fail);
        assert_eq!(ComplianceTier::classify(21.0), ComplianceTier::AaaNormal);
    }

    #[test]
    fn test_passes() {
        assert!(ComplianceTier::AaLargeOnly.passes());
        assert!(!ComplianceTier::Fail.passes());
    }

    #[test]
    fn test_result_between() {
        let result = ContrastResult::between(Colour::BLACK, Colour::WHITE);
        assert_eq!(result.tier, ComplianceTier::AaaNormal);
        assert!(result.passes());

        let result = ContrastResult::between(hex("#777777"), hex("#888888"));
        assert_eq!(result.tier, ComplianceTier::Fail);
        assert!(!result.passes());
    }

    #[test]
    fn test_tier_serializes_screaming_snake() {
        let json = serde_json::to_string(&ComplianceTier::AaNormalOrAaaLarge).unwrap();
        assert_eq!(json, "\"AA_NORMAL_OR_AAA_LARGE\"");
        let json = serde_json::to_string(&ComplianceTier::AaaNormal).unwrap();
        assert_eq!(json, "\"AAA_NORMAL\"");
    }
}
