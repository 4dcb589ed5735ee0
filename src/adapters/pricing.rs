//! Standard pricing configuration: bracket tables and significance
//! thresholds.
//!
//! Bracket tables ship with sensible defaults per product type and can
//! be replaced wholesale from a YAML document, so the pricing team can
//! retune brackets without a deploy.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::analysis::{PriceBracket, SignificancePolicy};
use crate::domain::foundation::ProductType;
use crate::ports::BracketPolicy;

/// Errors loading a pricing configuration document.
#[derive(Debug, Error)]
pub enum PricingConfigError {
    #[error("Invalid pricing YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown product type '{0}' in pricing config")]
    UnknownProductType(String),

    #[error("Bracket list for {0} is empty")]
    EmptyBrackets(ProductType),
}

/// One bracket row in the YAML document.
#[derive(Debug, Deserialize)]
struct BracketRow {
    min: f64,
    #[serde(default = "open_ended")]
    max: f64,
    label: String,
}

fn open_ended() -> f64 {
    f64::MAX
}

/// The YAML document shape.
#[derive(Debug, Deserialize)]
struct PricingDocument {
    #[serde(default)]
    brackets: BTreeMap<String, Vec<BracketRow>>,
    #[serde(default = "defaults::min_bracket_size")]
    min_bracket_size: usize,
    #[serde(default = "defaults::advantage_percentile")]
    advantage_percentile: f64,
    #[serde(default = "defaults::weakness_percentile")]
    weakness_percentile: f64,
    #[serde(default = "defaults::significant_pct_vs_avg")]
    significant_pct_vs_avg: f64,
}

mod defaults {
    pub fn min_bracket_size() -> usize {
        5
    }
    pub fn advantage_percentile() -> f64 {
        70.0
    }
    pub fn weakness_percentile() -> f64 {
        30.0
    }
    pub fn significant_pct_vs_avg() -> f64 {
        15.0
    }
}

/// Default bracket tables and percentile thresholds.
#[derive(Debug, Clone)]
pub struct StandardBracketPolicy {
    brackets: BTreeMap<ProductType, Vec<PriceBracket>>,
    min_bracket_size: usize,
    advantage_percentile: f64,
    weakness_percentile: f64,
    significant_pct_vs_avg: f64,
}

impl StandardBracketPolicy {
    /// Builds the policy from a YAML document. Product types missing
    /// from the document keep their default brackets.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PricingConfigError> {
        let doc: PricingDocument = serde_yaml::from_str(yaml)?;
        let mut policy = Self::default();
        policy.min_bracket_size = doc.min_bracket_size;
        policy.advantage_percentile = doc.advantage_percentile;
        policy.weakness_percentile = doc.weakness_percentile;
        policy.significant_pct_vs_avg = doc.significant_pct_vs_avg;

        for (key, rows) in doc.brackets {
            let product_type: ProductType = key
                .parse()
                .map_err(|_| PricingConfigError::UnknownProductType(key.clone()))?;
            if rows.is_empty() {
                return Err(PricingConfigError::EmptyBrackets(product_type));
            }
            let brackets = rows
                .into_iter()
                .map(|r| PriceBracket::new(r.min, r.max, r.label))
                .collect();
            policy.brackets.insert(product_type, brackets);
        }
        Ok(policy)
    }
}

impl Default for StandardBracketPolicy {
    fn default() -> Self {
        let mut brackets = BTreeMap::new();
        brackets.insert(
            ProductType::EBike,
            vec![
                PriceBracket::new(0.0, 1000.0, "Budget (under $1,000)"),
                PriceBracket::new(1000.0, 2000.0, "Mid-range ($1,000-$2,000)"),
                PriceBracket::new(2000.0, 3500.0, "Upper mid-range ($2,000-$3,500)"),
                PriceBracket::new(3500.0, f64::MAX, "Premium ($3,500+)"),
            ],
        );
        brackets.insert(
            ProductType::EScooter,
            vec![
                PriceBracket::new(0.0, 500.0, "Budget (under $500)"),
                PriceBracket::new(500.0, 1000.0, "Mid-range ($500-$1,000)"),
                PriceBracket::new(1000.0, 2000.0, "Performance ($1,000-$2,000)"),
                PriceBracket::new(2000.0, f64::MAX, "Premium ($2,000+)"),
            ],
        );
        brackets.insert(
            ProductType::Hoverboard,
            vec![
                PriceBracket::new(0.0, 150.0, "Budget (under $150)"),
                PriceBracket::new(150.0, 300.0, "Mid-range ($150-$300)"),
                PriceBracket::new(300.0, f64::MAX, "Premium ($300+)"),
            ],
        );
        brackets.insert(
            ProductType::ESkateboard,
            vec![
                PriceBracket::new(0.0, 500.0, "Budget (under $500)"),
                PriceBracket::new(500.0, 1000.0, "Mid-range ($500-$1,000)"),
                PriceBracket::new(1000.0, f64::MAX, "Premium ($1,000+)"),
            ],
        );
        Self {
            brackets,
            min_bracket_size: defaults::min_bracket_size(),
            advantage_percentile: defaults::advantage_percentile(),
            weakness_percentile: defaults::weakness_percentile(),
            significant_pct_vs_avg: defaults::significant_pct_vs_avg(),
        }
    }
}

impl SignificancePolicy for StandardBracketPolicy {
    fn is_advantage(&self, percentile: f64, pct_vs_avg: f64, higher_better: bool) -> bool {
        let oriented = if higher_better { pct_vs_avg } else { -pct_vs_avg };
        percentile >= self.advantage_percentile
            || (oriented >= self.significant_pct_vs_avg && percentile > 50.0)
    }

    fn is_weakness(&self, percentile: f64, pct_vs_avg: f64, higher_better: bool) -> bool {
        let oriented = if higher_better { pct_vs_avg } else { -pct_vs_avg };
        percentile <= self.weakness_percentile
            || (oriented <= -self.significant_pct_vs_avg && percentile < 50.0)
    }
}

impl BracketPolicy for StandardBracketPolicy {
    fn bracket_for(&self, price: f64, product_type: ProductType) -> Option<PriceBracket> {
        self.brackets
            .get(&product_type)?
            .iter()
            .find(|b| b.contains(price))
            .cloned()
    }

    fn min_bracket_size(&self) -> usize {
        self.min_bracket_size
    }
}
