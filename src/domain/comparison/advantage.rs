//! Advantage: the output unit for head-to-head and multi comparisons.

use serde::{Deserialize, Serialize};

/// One won spec, phrased for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advantage {
    /// Headline ("10 Nm more torque", "Best motor system").
    pub text: String,
    /// Underlying values ("90 Nm vs. 80 Nm").
    pub comparison: String,
    /// Catalog key of the winning spec.
    pub spec_key: String,
    /// Winning product index, for multi-mode output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl Advantage {
    /// Creates an advantage.
    pub fn new(
        text: impl Into<String>,
        comparison: impl Into<String>,
        spec_key: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            comparison: comparison.into(),
            spec_key: spec_key.into(),
            winner: None,
            tooltip: None,
        }
    }

    /// Tags the winning product index.
    pub fn with_winner(mut self, index: usize) -> Self {
        self.winner = Some(index);
        self
    }

    /// Attaches a tooltip.
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains() {
        let adv = Advantage::new("10 Nm more torque", "90 Nm vs. 80 Nm", "motor.torque")
            .with_winner(1)
            .with_tooltip("Measured at the crank");
        assert_eq!(adv.winner, Some(1));
        assert_eq!(adv.tooltip.as_deref(), Some("Measured at the crank"));
    }

    #[test]
    fn optional_fields_skipped_in_json() {
        let adv = Advantage::new("Better brakes", "hydraulic disc vs. rim", "brakes.type");
        let json = serde_json::to_string(&adv).unwrap();
        assert!(!json.contains("winner"));
        assert!(!json.contains("tooltip"));
    }
}
