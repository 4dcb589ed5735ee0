//! Product record: the read-only input unit for every comparison.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::GeoCode;

use super::SpecValue;

/// Most recent tracked price for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub current_price: f64,
    pub captured_at: Option<DateTime<Utc>>,
}

impl PriceSnapshot {
    /// Creates a snapshot without a capture timestamp.
    pub fn new(current_price: f64) -> Self {
        Self {
            current_price,
            captured_at: None,
        }
    }

    /// Creates a snapshot with a capture timestamp.
    pub fn captured(current_price: f64, at: DateTime<Utc>) -> Self {
        Self {
            current_price,
            captured_at: Some(at),
        }
    }
}

/// A fully-formed product as returned by the repository.
///
/// The core never mutates a record; comparisons read the spec tree and
/// price history and build fresh output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub specs: SpecValue,
    #[serde(default)]
    pub price_history: BTreeMap<GeoCode, PriceSnapshot>,
}

impl ProductRecord {
    /// Creates a record from a name and spec tree.
    pub fn new(name: impl Into<String>, specs: SpecValue) -> Self {
        Self {
            name: name.into(),
            specs,
            price_history: BTreeMap::new(),
        }
    }

    /// Adds a regional price snapshot (builder-style).
    pub fn with_price(mut self, geo: GeoCode, price: f64) -> Self {
        self.price_history.insert(geo, PriceSnapshot::new(price));
        self
    }

    /// Returns the current price for a region, if tracked and positive.
    pub fn current_price(&self, geo: &GeoCode) -> Option<f64> {
        self.price_history
            .get(geo)
            .map(|s| s.current_price)
            .filter(|p| *p > 0.0)
    }

    /// Reads a composite category score (`specs.scores.<category>`).
    pub fn category_score(&self, category: &str) -> Option<f64> {
        self.specs
            .get_path("scores")?
            .get_flat(category)?
            .as_f64()
    }

    /// Reads a price-efficiency metric (`specs.value_metrics.<geo>.<name>`).
    pub fn value_metric(&self, geo: &GeoCode, name: &str) -> Option<f64> {
        self.specs
            .get_path("value_metrics")?
            .get_flat(geo.as_str())?
            .get_flat(name)?
            .as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn us() -> GeoCode {
        GeoCode::new("us").unwrap()
    }

    fn record() -> ProductRecord {
        ProductRecord::new(
            "Aventon Level 3",
            SpecValue::from_json(json!({
                "motor": { "power": 500 },
                "scores": { "motor": 82, "ride_quality": 74 },
                "value_metrics": { "us": { "wh_per_dollar": 0.35 } },
            })),
        )
        .with_price(us(), 1799.0)
    }

    #[test]
    fn current_price_requires_positive_value() {
        let r = record();
        assert_eq!(r.current_price(&us()), Some(1799.0));

        let zero = ProductRecord::new("Free Bike", SpecValue::empty_map()).with_price(us(), 0.0);
        assert_eq!(zero.current_price(&us()), None);

        let untracked = GeoCode::new("uk").unwrap();
        assert_eq!(r.current_price(&untracked), None);
    }

    #[test]
    fn category_score_reads_scores_map() {
        let r = record();
        assert_eq!(r.category_score("motor"), Some(82.0));
        assert_eq!(r.category_score("battery"), None);
    }

    #[test]
    fn value_metric_is_geo_scoped() {
        let r = record();
        assert_eq!(r.value_metric(&us(), "wh_per_dollar"), Some(0.35));
        assert_eq!(r.value_metric(&GeoCode::new("uk").unwrap(), "wh_per_dollar"), None);
        assert_eq!(r.value_metric(&us(), "range_per_dollar"), None);
    }

    #[test]
    fn records_round_trip_through_json() {
        let r = record();
        let json = serde_json::to_string(&r).unwrap();
        let back: ProductRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
