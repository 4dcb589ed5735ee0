//! Tunable comparison thresholds.
//!
//! One value set applies to every product type. All fields have serde
//! defaults so the config layer can overlay just the values an
//! operator actually changes.

use serde::{Deserialize, Serialize};

/// Thresholds shared by the three comparison modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSettings {
    /// Hard cap on advantages per side in head-to-head mode.
    #[serde(default = "defaults::max_advantages")]
    pub max_advantages: usize,

    /// Default relative gate for numeric specs, percent of the smaller
    /// value. Differences under this are not worth a sentence.
    #[serde(default = "defaults::pct_threshold")]
    pub pct_threshold: f64,

    /// Category-score gap under which a composite verdict is
    /// suppressed and child specs compete individually.
    #[serde(default = "defaults::composite_closeness")]
    pub composite_closeness: f64,

    /// Minimum score-vs-cohort-average gap for a score-based verdict.
    #[serde(default = "defaults::score_diff_gate")]
    pub score_diff_gate: f64,

    /// Score gap for the middle tier label.
    #[serde(default = "defaults::score_band_strong")]
    pub score_band_strong: f64,

    /// Score gap for the top tier label.
    #[serde(default = "defaults::score_band_exceptional")]
    pub score_band_exceptional: f64,

    /// A category award in multi mode also requires at least this
    /// absolute score.
    #[serde(default = "defaults::category_floor")]
    pub category_floor: f64,

    /// Minimum comparable values for any cohort-relative verdict.
    #[serde(default = "defaults::min_cohort_size")]
    pub min_cohort_size: usize,
}

mod defaults {
    pub fn max_advantages() -> usize {
        4
    }
    pub fn pct_threshold() -> f64 {
        3.0
    }
    pub fn composite_closeness() -> f64 {
        5.0
    }
    pub fn score_diff_gate() -> f64 {
        8.0
    }
    pub fn score_band_strong() -> f64 {
        14.0
    }
    pub fn score_band_exceptional() -> f64 {
        20.0
    }
    pub fn category_floor() -> f64 {
        50.0
    }
    pub fn min_cohort_size() -> usize {
        3
    }
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        Self {
            max_advantages: defaults::max_advantages(),
            pct_threshold: defaults::pct_threshold(),
            composite_closeness: defaults::composite_closeness(),
            score_diff_gate: defaults::score_diff_gate(),
            score_band_strong: defaults::score_band_strong(),
            score_band_exceptional: defaults::score_band_exceptional(),
            category_floor: defaults::category_floor(),
            min_cohort_size: defaults::min_cohort_size(),
        }
    }
}
