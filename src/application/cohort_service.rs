//! Cohort analysis service: the bracket/fallback state machine.
//!
//! Owns the ports. Decides whether a product is compared against its
//! price bracket or the whole category, fetches the cohort, and hands
//! the pure analyzer everything it needs.

use thiserror::Error;
use tracing::debug;

use crate::domain::analysis::{
    CohortAnalysis, CohortFallback, ComparisonMode, FallbackReason, PriceBracket,
    SingleVsCohortAnalyzer,
};
use crate::domain::catalog::{SpecCatalog, RANKINGS};
use crate::domain::comparison::{
    Advantage, ComparisonSettings, HeadToHeadComparator, MultiComparator,
};
use crate::domain::foundation::{GeoCode, ProductType};
use crate::domain::spec::ProductRecord;
use crate::ports::{BracketPolicy, CohortRepository, RepositoryError};

/// Errors surfaced by the analysis service.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Application-level entry point for all three comparison modes.
pub struct CohortAnalysisService<R, P> {
    repository: R,
    pricing: P,
    settings: ComparisonSettings,
}

impl<R, P> CohortAnalysisService<R, P>
where
    R: CohortRepository,
    P: BracketPolicy,
{
    /// Creates a service over a repository and pricing policy.
    pub fn new(repository: R, pricing: P, settings: ComparisonSettings) -> Self {
        Self {
            repository,
            pricing,
            settings,
        }
    }

    /// Head-to-head comparison; pure passthrough, no I/O.
    pub fn head_to_head(
        &self,
        product_type: ProductType,
        products: &[ProductRecord],
    ) -> Vec<Vec<Advantage>> {
        let catalog = SpecCatalog::for_type(product_type);
        HeadToHeadComparator::new(catalog, &RANKINGS, &self.settings).compare(products)
    }

    /// Multi ("best at") comparison; pure passthrough, no I/O.
    pub fn best_of(
        &self,
        product_type: ProductType,
        products: &[ProductRecord],
    ) -> Vec<Vec<Advantage>> {
        let catalog = SpecCatalog::for_type(product_type);
        MultiComparator::new(catalog, &RANKINGS, &self.settings).compare(products)
    }

    /// Analyzes one product against its cohort for a region.
    ///
    /// Bracket mode needs a positive regional price, a configured
    /// bracket, and enough peers inside it; every failed step falls
    /// back to category-wide comparison with a recorded reason.
    pub async fn analyze_against_cohort(
        &self,
        product: &ProductRecord,
        product_type: ProductType,
        geo: &GeoCode,
    ) -> Result<CohortAnalysis, AnalysisError> {
        let catalog = SpecCatalog::for_type(product_type);
        let category = self.repository.get_all(product_type).await?;

        let (mode, bracket, fallback, cohort) =
            self.select_cohort(product, product_type, geo, category);

        let analyzer = SingleVsCohortAnalyzer::new(catalog, &self.settings);
        Ok(analyzer.analyze(product, &cohort, geo, &self.pricing, mode, bracket, fallback))
    }

    /// The cohort selection state machine.
    fn select_cohort(
        &self,
        product: &ProductRecord,
        product_type: ProductType,
        geo: &GeoCode,
        category: Vec<ProductRecord>,
    ) -> (
        ComparisonMode,
        Option<PriceBracket>,
        Option<CohortFallback>,
        Vec<ProductRecord>,
    ) {
        let Some(price) = product.current_price(geo) else {
            debug!(product = %product.name, %geo, "no regional price, category-wide comparison");
            let fallback = CohortFallback::new(
                FallbackReason::NoRegionalPrice,
                format!(
                    "No {} price is tracked for this product; compared against the whole category.",
                    geo
                ),
            );
            return (ComparisonMode::Category, None, Some(fallback), category);
        };

        let Some(bracket) = self.pricing.bracket_for(price, product_type) else {
            return (ComparisonMode::Category, None, None, category);
        };

        let in_bracket: Vec<ProductRecord> = category
            .iter()
            .filter(|p| {
                p.name == product.name
                    || p.current_price(geo)
                        .map(|peer_price| bracket.contains(peer_price))
                        .unwrap_or(false)
            })
            .cloned()
            .collect();

        if in_bracket.len() < self.pricing.min_bracket_size() {
            debug!(
                bracket = %bracket.label,
                size = in_bracket.len(),
                "bracket cohort too small, category-wide comparison"
            );
            let fallback = CohortFallback::new(
                FallbackReason::BracketTooSmall,
                format!(
                    "Only {} products in the {} bracket; compared against the whole category.",
                    in_bracket.len(),
                    bracket.label
                ),
            );
            return (ComparisonMode::Category, None, Some(fallback), category);
        }

        (ComparisonMode::Bracket, Some(bracket), None, in_bracket)
    }
}
