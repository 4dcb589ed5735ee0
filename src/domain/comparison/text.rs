//! Tiered natural-language labels and shared phrase builders.
//!
//! All comparison strings funnel through here so the three modes stay
//! consistent. The generic ladder is Best / Excellent / Strong with a
//! percent-vs-average fallback; weight and value-for-money specs carry
//! bespoke label sets because "Strong weight" is not English.

use crate::domain::catalog::SpecDefinition;
use crate::domain::foundation::{format_number, Percentile};

use super::ComparisonSettings;

/// Which label ladder a spec uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Generic,
    Weight,
    Value,
}

impl LabelStyle {
    /// Picks the ladder for a spec definition.
    pub fn for_spec(def: &SpecDefinition) -> Self {
        if def.key == "weight" {
            LabelStyle::Weight
        } else if def.key.starts_with("value_metrics.") || def.key.ends_with("per_dollar") {
            LabelStyle::Value
        } else {
            LabelStyle::Generic
        }
    }
}

/// Uppercases the first character of a phrase.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Formats a value with its unit for comparison strings ("90 Nm").
pub fn format_value(value: f64, unit: Option<&str>) -> String {
    match unit {
        Some(u) => format!("{} {}", format_number(value), u),
        None => format_number(value),
    }
}

/// Builds the "A vs. B" comparison string.
pub fn versus(winner: &str, loser: &str) -> String {
    format!("{} vs. {}", winner, loser)
}

/// Headline for a numeric head-to-head win: "10 Nm more torque".
pub fn numeric_advantage_text(diff: f64, unit: Option<&str>, comparative: &str) -> String {
    format!("{} {}", format_value(diff.abs(), unit), comparative)
}

/// Tiered advantage label for cohort-relative results.
pub fn advantage_label(
    style: LabelStyle,
    label: &str,
    is_best: bool,
    percentile: Percentile,
    pct_vs_avg: f64,
) -> String {
    let pct = pct_vs_avg.abs().round();
    match style {
        LabelStyle::Weight => {
            if is_best || percentile.at_least(95.0) {
                "Lightest in its class".to_string()
            } else if percentile.at_least(90.0) {
                "Very light".to_string()
            } else if percentile.at_least(80.0) {
                "Lighter than most".to_string()
            } else {
                format!("{:.0}% lighter than average", pct)
            }
        }
        LabelStyle::Value => {
            if is_best || percentile.at_least(95.0) {
                "Best value in its class".to_string()
            } else if percentile.at_least(90.0) {
                "Excellent value".to_string()
            } else if percentile.at_least(80.0) {
                "Strong value".to_string()
            } else {
                format!("{:.0}% better value than average", pct)
            }
        }
        LabelStyle::Generic => {
            if is_best || percentile.at_least(95.0) {
                format!("Best {} in its class", label)
            } else if percentile.at_least(90.0) {
                capitalize(&format!("excellent {}", label))
            } else if percentile.at_least(80.0) {
                capitalize(&format!("strong {}", label))
            } else {
                capitalize(&format!("{} {:.0}% better than average", label, pct))
            }
        }
    }
}

/// Tiered weakness label, mirroring [`advantage_label`].
pub fn weakness_label(
    style: LabelStyle,
    label: &str,
    is_worst: bool,
    percentile: Percentile,
    pct_vs_avg: f64,
) -> String {
    let pct = pct_vs_avg.abs().round();
    match style {
        LabelStyle::Weight => {
            if is_worst || percentile.at_most(5.0) {
                "Heaviest in its class".to_string()
            } else if percentile.at_most(10.0) {
                "Very heavy".to_string()
            } else if percentile.at_most(20.0) {
                "Heavier than most".to_string()
            } else {
                format!("{:.0}% heavier than average", pct)
            }
        }
        LabelStyle::Value => {
            if is_worst || percentile.at_most(5.0) {
                "Worst value in its class".to_string()
            } else if percentile.at_most(10.0) {
                "Poor value".to_string()
            } else if percentile.at_most(20.0) {
                "Below-average value".to_string()
            } else {
                format!("{:.0}% worse value than average", pct)
            }
        }
        LabelStyle::Generic => {
            if is_worst || percentile.at_most(5.0) {
                format!("Worst {} in its class", label)
            } else if percentile.at_most(10.0) {
                capitalize(&format!("poor {}", label))
            } else if percentile.at_most(20.0) {
                capitalize(&format!("weak {}", label))
            } else {
                capitalize(&format!("{} {:.0}% worse than average", label, pct))
            }
        }
    }
}

/// Tier label for a score-based advantage, by score-vs-average gap.
pub fn score_advantage_label(label: &str, diff: f64, settings: &ComparisonSettings) -> String {
    if diff >= settings.score_band_exceptional {
        capitalize(&format!("class-leading {}", label))
    } else if diff >= settings.score_band_strong {
        capitalize(&format!("excellent {}", label))
    } else {
        capitalize(&format!("above-average {}", label))
    }
}

/// Tier label for a score-based weakness.
pub fn score_weakness_label(label: &str, diff: f64, settings: &ComparisonSettings) -> String {
    if diff <= -settings.score_band_exceptional {
        capitalize(&format!("far below average {}", label))
    } else if diff <= -settings.score_band_strong {
        capitalize(&format!("poor {}", label))
    } else {
        capitalize(&format!("below-average {}", label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::SpecKind;

    fn generic_def() -> SpecDefinition {
        SpecDefinition::numeric("motor.torque", "torque", true, "more torque").unit("Nm")
    }

    #[test]
    fn style_detection() {
        assert_eq!(LabelStyle::for_spec(&generic_def()), LabelStyle::Generic);

        let weight = SpecDefinition::numeric("weight", "weight", false, "lighter");
        assert_eq!(LabelStyle::for_spec(&weight), LabelStyle::Weight);

        let value = SpecDefinition::numeric(
            "value_metrics.wh_per_dollar",
            "battery capacity per dollar",
            true,
            "better value",
        );
        assert_eq!(LabelStyle::for_spec(&value), LabelStyle::Value);

        let derived = SpecDefinition::with_kind(
            "wh_per_lb",
            "battery capacity per pound",
            true,
            SpecKind::Derived {
                numerator: "battery.capacity",
                denominator: "weight",
            },
        );
        assert_eq!(LabelStyle::for_spec(&derived), LabelStyle::Generic);
    }

    #[test]
    fn generic_ladder_tiers() {
        let best = advantage_label(LabelStyle::Generic, "torque", true, Percentile::new(99.0), 30.0);
        assert_eq!(best, "Best torque in its class");

        let excellent =
            advantage_label(LabelStyle::Generic, "torque", false, Percentile::new(91.0), 20.0);
        assert_eq!(excellent, "Excellent torque");

        let strong =
            advantage_label(LabelStyle::Generic, "torque", false, Percentile::new(82.0), 12.0);
        assert_eq!(strong, "Strong torque");

        let pct = advantage_label(LabelStyle::Generic, "torque", false, Percentile::new(70.0), 9.4);
        assert_eq!(pct, "Torque 9% better than average");
    }

    #[test]
    fn percentile_95_counts_as_best_even_without_rank() {
        let label =
            advantage_label(LabelStyle::Generic, "range", false, Percentile::new(96.0), 30.0);
        assert_eq!(label, "Best range in its class");
    }

    #[test]
    fn weight_ladder_is_bespoke() {
        let best = advantage_label(LabelStyle::Weight, "weight", true, Percentile::HUNDRED, -20.0);
        assert_eq!(best, "Lightest in its class");

        let weak = weakness_label(LabelStyle::Weight, "weight", false, Percentile::new(15.0), 18.0);
        assert_eq!(weak, "Heavier than most");

        let pct = weakness_label(LabelStyle::Weight, "weight", false, Percentile::new(30.0), 12.0);
        assert_eq!(pct, "12% heavier than average");
    }

    #[test]
    fn value_ladder_is_bespoke() {
        let adv = advantage_label(LabelStyle::Value, "value", false, Percentile::new(92.0), 25.0);
        assert_eq!(adv, "Excellent value");

        let weak = weakness_label(LabelStyle::Value, "value", true, Percentile::ZERO, -30.0);
        assert_eq!(weak, "Worst value in its class");
    }

    #[test]
    fn score_tiers_follow_bands() {
        let settings = ComparisonSettings::default();
        assert_eq!(
            score_advantage_label("motor system", 22.0, &settings),
            "Class-leading motor system"
        );
        assert_eq!(
            score_advantage_label("motor system", 15.0, &settings),
            "Excellent motor system"
        );
        assert_eq!(
            score_advantage_label("motor system", 9.0, &settings),
            "Above-average motor system"
        );
        assert_eq!(
            score_weakness_label("motor system", -25.0, &settings),
            "Far below average motor system"
        );
        assert_eq!(
            score_weakness_label("motor system", -9.0, &settings),
            "Below-average motor system"
        );
    }

    #[test]
    fn numeric_text_is_unit_aware() {
        assert_eq!(
            numeric_advantage_text(10.0, Some("Nm"), "more torque"),
            "10 Nm more torque"
        );
        assert_eq!(
            numeric_advantage_text(-4.4, Some("lbs"), "lighter"),
            "4.4 lbs lighter"
        );
    }

    #[test]
    fn versus_string() {
        assert_eq!(versus("90 Nm", "80 Nm"), "90 Nm vs. 80 Nm");
    }
}
