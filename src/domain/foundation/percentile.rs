//! Percentile value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A percentile position within a cohort, between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentile(f64);

impl Percentile {
    /// Bottom of the cohort.
    pub const ZERO: Self = Self(0.0);

    /// Top of the cohort.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new Percentile, clamping to the valid range.
    ///
    /// Non-finite input clamps to 0.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a Percentile, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("percentile", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// True if this percentile is at or above the given threshold.
    pub fn at_least(&self, threshold: f64) -> bool {
        self.0 >= threshold
    }

    /// True if this percentile is at or below the given threshold.
    pub fn at_most(&self, threshold: f64) -> bool {
        self.0 <= threshold
    }
}

impl Default for Percentile {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round() as i64;
        let suffix = match (rounded % 10, rounded % 100) {
            (_, 11..=13) => "th",
            (1, _) => "st",
            (2, _) => "nd",
            (3, _) => "rd",
            _ => "th",
        };
        write!(f, "{}{} percentile", rounded, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(Percentile::new(0.0).value(), 0.0);
        assert_eq!(Percentile::new(50.0).value(), 50.0);
        assert_eq!(Percentile::new(100.0).value(), 100.0);
    }

    #[test]
    fn new_clamps_out_of_range() {
        assert_eq!(Percentile::new(101.0).value(), 100.0);
        assert_eq!(Percentile::new(-5.0).value(), 0.0);
    }

    #[test]
    fn new_clamps_non_finite_to_zero() {
        assert_eq!(Percentile::new(f64::NAN).value(), 0.0);
        assert_eq!(Percentile::new(f64::INFINITY).value(), 0.0);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Percentile::try_new(100.5).is_err());
        assert!(Percentile::try_new(-0.1).is_err());
        assert!(Percentile::try_new(99.9).is_ok());
    }

    #[test]
    fn threshold_helpers() {
        let p = Percentile::new(90.0);
        assert!(p.at_least(90.0));
        assert!(p.at_least(80.0));
        assert!(!p.at_least(95.0));
        assert!(p.at_most(90.0));
        assert!(!p.at_most(50.0));
    }

    #[test]
    fn displays_as_ordinal_phrase() {
        assert_eq!(format!("{}", Percentile::new(85.0)), "85th percentile");
        assert_eq!(format!("{}", Percentile::new(91.0)), "91st percentile");
        assert_eq!(format!("{}", Percentile::new(92.0)), "92nd percentile");
        assert_eq!(format!("{}", Percentile::new(93.0)), "93rd percentile");
        assert_eq!(format!("{}", Percentile::new(11.0)), "11th percentile");
    }
}
