//! Geo code value object for regional pricing scopes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A lowercase two-letter region code ("us", "uk", "ca", ...).
///
/// Price history and value metrics are keyed per region; the code is
/// normalized at construction so lookups never miss on case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoCode(String);

impl GeoCode {
    /// Creates a geo code, normalizing to lowercase.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into().trim().to_ascii_lowercase();
        if code.is_empty() {
            return Err(ValidationError::empty_field("geo"));
        }
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "geo",
                "expected a two-letter region code",
            ));
        }
        Ok(Self(code))
    }

    /// Returns the normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
