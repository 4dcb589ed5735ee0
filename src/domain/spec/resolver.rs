//! Value resolution against a product's spec tree.
//!
//! Lookup order for a dotted key:
//! 1. the direct path,
//! 2. the same path under the product type's namespace prefix,
//! 3. a flat key at the tree root (pre-computed/derived fields are
//!    stored there under their full dotted name).
//!
//! Empty strings count as absent. Geo-scoped value metrics
//! (`value_metrics.<name>`) resolve under `value_metrics.<geo>.<name>`.

use crate::domain::foundation::{GeoCode, ProductType};

use super::{ProductRecord, SpecValue};

/// Prefix marking a geo-scoped price-efficiency metric.
const VALUE_METRICS_PREFIX: &str = "value_metrics.";

/// Resolves spec keys for one product type.
#[derive(Debug, Clone, Copy)]
pub struct ValueResolver {
    product_type: ProductType,
}

impl ValueResolver {
    /// Creates a resolver for the given product type.
    pub fn new(product_type: ProductType) -> Self {
        Self { product_type }
    }

    /// Returns the product type this resolver serves.
    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    /// Resolves a key to a spec value, or `None` if absent or empty.
    pub fn resolve<'a>(&self, record: &'a ProductRecord, key: &str) -> Option<&'a SpecValue> {
        let found = record
            .specs
            .get_path(key)
            .or_else(|| {
                let namespaced = format!("{}.{}", self.product_type.namespace(), key);
                record.specs.get_path(&namespaced)
            })
            .or_else(|| record.specs.get_flat(key))?;

        if found.is_empty() {
            return None;
        }
        Some(found)
    }

    /// Resolves a key to a finite number, or `None`.
    pub fn resolve_number(&self, record: &ProductRecord, key: &str) -> Option<f64> {
        self.resolve(record, key)?.as_f64()
    }

    /// Resolves a key, falling back to a second key when the first is
    /// absent. Used for manufacturer-claimed values standing in for
    /// missing tested ones.
    pub fn resolve_with_fallback<'a>(
        &self,
        record: &'a ProductRecord,
        key: &str,
        fallback_key: Option<&str>,
    ) -> Option<&'a SpecValue> {
        self.resolve(record, key)
            .or_else(|| fallback_key.and_then(|fk| self.resolve(record, fk)))
    }

    /// Resolves a numeric key for a region. `value_metrics.<name>` keys
    /// are geo-scoped; everything else resolves normally.
    pub fn resolve_number_for_geo(
        &self,
        record: &ProductRecord,
        geo: &GeoCode,
        key: &str,
    ) -> Option<f64> {
        if let Some(metric) = key.strip_prefix(VALUE_METRICS_PREFIX) {
            return record.value_metric(geo, metric);
        }
        self.resolve_number(record, key)
    }

    /// Computes a derived per-weight ratio (e.g. Wh/lb).
    ///
    /// Returns `None` unless the denominator resolves to a positive
    /// number; a zero or negative weight is scrape garbage, not a
    /// division candidate.
    pub fn derived_ratio(
        &self,
        record: &ProductRecord,
        numerator_key: &str,
        denominator_key: &str,
    ) -> Option<f64> {
        let numerator = self.resolve_number(record, numerator_key)?;
        let denominator = self.resolve_number(record, denominator_key)?;
        if denominator <= 0.0 {
            return None;
        }
        Some(numerator / denominator)
    }
}
