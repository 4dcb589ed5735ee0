//! Engine configuration.
//!
//! Thresholds load from environment variables with the `RIDE_COMPARE_`
//! prefix and `__` as the nesting separator, overlaid on the built-in
//! defaults. Example:
//!
//! ```no_run
//! use ride_compare::config::EngineConfig;
//!
//! std::env::set_var("RIDE_COMPARE_COMPARISON__MAX_ADVANTAGES", "6");
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! assert_eq!(config.comparison.max_advantages, 6);
//! ```

mod error;

pub use error::{ConfigError, ConfigValidationError};

use serde::Deserialize;

use crate::domain::comparison::ComparisonSettings;

/// Environment variable prefix.
const ENV_PREFIX: &str = "RIDE_COMPARE";

/// Root engine configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Comparison thresholds shared by all modes.
    #[serde(default)]
    pub comparison: ComparisonSettings,
}

impl EngineConfig {
    /// Loads configuration from the environment over defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let loaded = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        let engine: EngineConfig = loaded.try_deserialize()?;
        Ok(engine)
    }

    /// Validates semantic constraints the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let c = &self.comparison;
        if c.max_advantages == 0 {
            return Err(ConfigValidationError::ZeroMaxAdvantages);
        }
        for (field, value) in [
            ("pct_threshold", c.pct_threshold),
            ("composite_closeness", c.composite_closeness),
            ("category_floor", c.category_floor),
        ] {
            if value < 0.0 {
                return Err(ConfigValidationError::NegativeThreshold { field, value });
            }
        }
        if !(c.score_diff_gate <= c.score_band_strong
            && c.score_band_strong <= c.score_band_exceptional)
        {
            return Err(ConfigValidationError::UnorderedScoreBands {
                gate: c.score_diff_gate,
                strong: c.score_band_strong,
                exceptional: c.score_band_exceptional,
            });
        }
        if c.min_cohort_size < 2 {
            return Err(ConfigValidationError::CohortSizeTooSmall(c.min_cohort_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.comparison.max_advantages, 4);
    }

    #[test]
    fn zero_cap_fails_validation() {
        let mut config = EngineConfig::default();
        config.comparison.max_advantages = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::ZeroMaxAdvantages)
        ));
    }

    #[test]
    fn unordered_bands_fail_validation() {
        let mut config = EngineConfig::default();
        config.comparison.score_band_strong = 25.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnorderedScoreBands { .. })
        ));
    }

    #[test]
    fn negative_threshold_fails_validation() {
        let mut config = EngineConfig::default();
        config.comparison.pct_threshold = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::NegativeThreshold { .. })
        ));
    }

    #[test]
    fn small_cohort_gate_fails_validation() {
        let mut config = EngineConfig::default();
        config.comparison.min_cohort_size = 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::CohortSizeTooSmall(1))
        ));
    }
}
