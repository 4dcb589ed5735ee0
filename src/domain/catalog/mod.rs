//! Declarative spec catalogs and categorical ranking tables.
//!
//! A catalog is static configuration: which specs matter for a product
//! type, in what priority order, with what significance thresholds,
//! and how categorical values rank against each other. Comparators
//! never hard-code spec knowledge; they walk the catalog.

#[allow(clippy::module_inception)]
mod catalog;
mod definition;
mod ebike;
mod escooter;
mod eskateboard;
mod hoverboard;
mod rankings;

pub use catalog::{SpecCatalog, WeaknessOverride};
pub use definition::{
    BestTypeScorer, CategoryScoreSpec, CompositeSpec, DescriptiveClassifier, DetailBuilder,
    SpecDefinition, SpecKind,
};
pub use rankings::{table_names, RankingSet, RankingTable, RANKINGS};
