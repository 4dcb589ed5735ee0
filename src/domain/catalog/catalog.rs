//! Per-product-type spec catalogs.

use once_cell::sync::Lazy;

use crate::domain::foundation::ProductType;

use super::definition::{CategoryScoreSpec, CompositeSpec, SpecDefinition};
use super::{ebike, escooter, eskateboard, hoverboard};

/// Suppresses a cohort weakness verdict for a (spec key, value) pair.
///
/// Used for values capped by regulation rather than engineering, e.g.
/// a 250 W e-bike motor in markets where 250 W is the legal limit.
pub type WeaknessOverride = fn(&str, f64) -> bool;

/// Everything the comparators need to know about one product type.
#[derive(Debug)]
pub struct SpecCatalog {
    pub product_type: ProductType,
    /// Priority-ordered specs for head-to-head and multi comparison.
    pub comparison_specs: Vec<SpecDefinition>,
    /// Composite category groups evaluated before individual specs.
    pub composites: Vec<CompositeSpec>,
    /// Specs evaluated in single-vs-cohort analysis.
    pub analysis_specs: Vec<SpecDefinition>,
    /// Scored categories awarded in multi mode and averaged for cohort
    /// context.
    pub score_categories: Vec<CategoryScoreSpec>,
    /// Domain-specific weakness suppression.
    pub weakness_override: WeaknessOverride,
}

impl SpecCatalog {
    /// Returns the shared catalog for a product type.
    pub fn for_type(product_type: ProductType) -> &'static SpecCatalog {
        match product_type {
            ProductType::EBike => &EBIKE,
            ProductType::EScooter => &ESCOOTER,
            ProductType::Hoverboard => &HOVERBOARD,
            ProductType::ESkateboard => &ESKATEBOARD,
        }
    }

    /// Looks up a comparison spec by key.
    pub fn comparison_spec(&self, key: &str) -> Option<&SpecDefinition> {
        self.comparison_specs.iter().find(|d| d.key == key)
    }

    /// Looks up a scored category by its `scores` key.
    pub fn score_category(&self, category: &str) -> Option<&CategoryScoreSpec> {
        self.score_categories.iter().find(|c| c.category == category)
    }
}

static EBIKE: Lazy<SpecCatalog> = Lazy::new(ebike::catalog);
static ESCOOTER: Lazy<SpecCatalog> = Lazy::new(escooter::catalog);
static HOVERBOARD: Lazy<SpecCatalog> = Lazy::new(hoverboard::catalog);
static ESKATEBOARD: Lazy<SpecCatalog> = Lazy::new(eskateboard::catalog);
