//! Output shapes for single-vs-cohort analysis.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::Percentile;

/// How the comparison cohort was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Peers from the product's price bracket.
    Bracket,
    /// The whole category, because no bracket could be used.
    Category,
}

/// Why bracket mode was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    NoRegionalPrice,
    BracketTooSmall,
}

/// A recorded fallback with a display message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortFallback {
    pub reason: FallbackReason,
    pub message: String,
}

impl CohortFallback {
    /// Creates a fallback record.
    pub fn new(reason: FallbackReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

/// A price bracket supplied by the pricing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBracket {
    pub min: f64,
    pub max: f64,
    pub label: String,
}

impl PriceBracket {
    /// Creates a bracket.
    pub fn new(min: f64, max: f64, label: impl Into<String>) -> Self {
        Self {
            min,
            max,
            label: label.into(),
        }
    }

    /// True if a price falls inside this bracket.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// One classified strength or weakness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisItem {
    pub spec_key: String,
    pub label: String,
    pub product_value: f64,
    /// Absent for fixed-band classifications with no usable cohort.
    pub cohort_avg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub percentile: Percentile,
    pub pct_vs_avg: f64,
    pub text: String,
    pub comparison: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

/// The full single-vs-cohort result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CohortAnalysis {
    pub advantages: Vec<AnalysisItem>,
    pub weaknesses: Vec<AnalysisItem>,
    pub comparison_mode: ComparisonMode,
    pub bracket: Option<PriceBracket>,
    /// Number of products in the comparison set, this product included.
    pub products_in_set: usize,
    /// Average category scores across the comparison set.
    pub cohort_avg_scores: BTreeMap<String, f64>,
    pub fallback: Option<CohortFallback>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_reason_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&FallbackReason::NoRegionalPrice).unwrap(),
            "\"no_regional_price\""
        );
        assert_eq!(
            serde_json::to_string(&FallbackReason::BracketTooSmall).unwrap(),
            "\"bracket_too_small\""
        );
    }

    #[test]
    fn comparison_mode_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ComparisonMode::Bracket).unwrap(),
            "\"bracket\""
        );
    }

    #[test]
    fn bracket_contains_is_inclusive() {
        let b = PriceBracket::new(500.0, 1000.0, "$500-$1,000");
        assert!(b.contains(500.0));
        assert!(b.contains(1000.0));
        assert!(!b.contains(1000.01));
        assert!(!b.contains(499.99));
    }
}
