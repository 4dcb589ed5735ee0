//! Configuration error types.

use thiserror::Error;

/// Errors loading the engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ConfigValidationError),
}

/// Errors from semantic validation of loaded values.
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("max_advantages must be at least 1")]
    ZeroMaxAdvantages,

    #[error("{field} must not be negative, got {value}")]
    NegativeThreshold { field: &'static str, value: f64 },

    #[error("score bands must be ordered: gate {gate} <= strong {strong} <= exceptional {exceptional}")]
    UnorderedScoreBands {
        gate: f64,
        strong: f64,
        exceptional: f64,
    },

    #[error("min_cohort_size must be at least 2, got {0}")]
    CohortSizeTooSmall(usize),
}
