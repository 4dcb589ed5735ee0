//! N-way "best at" comparison across three or more products.
//!
//! Every spec in the catalog elects at most one winner; any tie for
//! the best value suppresses the spec entirely rather than picking a
//! product arbitrarily. Category-score awards run after the per-spec
//! pass and carry a detail string built from the winner's raw specs.

use tracing::{debug, trace};

use crate::domain::catalog::{
    BestTypeScorer, RankingSet, SpecCatalog, SpecDefinition, SpecKind,
};
use crate::domain::foundation::{approx_eq, ProductType};
use crate::domain::spec::{ProductRecord, SpecValue, ValueResolver};

use super::scoring::{suspension_score, IpRating};
use super::text;
use super::{Advantage, ComparisonSettings, LabelStyle};

/// Minimum number of products for a multi comparison.
const MIN_PRODUCTS: usize = 3;

/// N-way comparator for one product type.
pub struct MultiComparator<'a> {
    catalog: &'a SpecCatalog,
    rankings: &'a RankingSet,
    settings: &'a ComparisonSettings,
    resolver: ValueResolver,
}

impl<'a> MultiComparator<'a> {
    /// Creates a comparator over a catalog, ranking set, and settings.
    pub fn new(
        catalog: &'a SpecCatalog,
        rankings: &'a RankingSet,
        settings: &'a ComparisonSettings,
    ) -> Self {
        Self {
            catalog,
            rankings,
            settings,
            resolver: ValueResolver::new(catalog.product_type),
        }
    }

    /// Returns the product type this comparator serves.
    pub fn product_type(&self) -> ProductType {
        self.catalog.product_type
    }

    /// Compares the products, returning one advantage list per input
    /// index. Fewer than three products degrades to empty lists.
    pub fn compare(&self, products: &[ProductRecord]) -> Vec<Vec<Advantage>> {
        let mut sides: Vec<Vec<Advantage>> = vec![Vec::new(); products.len()];
        if products.len() < MIN_PRODUCTS {
            debug!(count = products.len(), "multi comparison requires 3+ products");
            return sides;
        }

        for def in &self.catalog.comparison_specs {
            if let Some((winner, advantage)) = self.evaluate(def, products) {
                sides[winner].push(advantage.with_winner(winner));
            }
        }

        for (winner, advantage) in self.category_awards(products) {
            sides[winner].push(advantage.with_winner(winner));
        }

        sides
    }

    /// Per-spec winner selection; `None` on ties, missing data, or a
    /// failed notability gate.
    fn evaluate(
        &self,
        def: &SpecDefinition,
        products: &[ProductRecord],
    ) -> Option<(usize, Advantage)> {
        match &def.kind {
            SpecKind::Numeric { .. } => self.evaluate_numeric(def, products),
            SpecKind::Ranked { table } => self.evaluate_ranked(def, products, table),
            SpecKind::Boolean => self.evaluate_boolean(def, products),
            SpecKind::FeatureCount { min_notable, .. } => {
                self.evaluate_feature_count(def, products, *min_notable)
            }
            SpecKind::MotorCount => self.evaluate_motor_count(def, products),
            SpecKind::BestType { scorer } => self.evaluate_best_type(def, products, *scorer),
            SpecKind::ScoreBased { .. }
            | SpecKind::AbsoluteBands { .. }
            | SpecKind::Descriptive { .. }
            | SpecKind::Derived { .. } => None,
        }
    }

    /// Values per product, `None` where a product lacks the spec.
    fn numeric_values(
        &self,
        def: &SpecDefinition,
        products: &[ProductRecord],
    ) -> Vec<Option<f64>> {
        products
            .iter()
            .map(|p| {
                self.resolver
                    .resolve_with_fallback(p, def.key, def.fallback_key)
                    .and_then(SpecValue::as_f64)
            })
            .collect()
    }

    /// Applies the `require_all` gate; returns present (index, value)
    /// pairs otherwise.
    fn present_values(
        &self,
        def: &SpecDefinition,
        values: Vec<Option<f64>>,
    ) -> Option<Vec<(usize, f64)>> {
        if def.require_all && values.iter().any(Option::is_none) {
            trace!(spec = def.key, "require_all unmet, spec skipped");
            return None;
        }
        let present: Vec<(usize, f64)> = values
            .into_iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i, v)))
            .collect();
        if present.len() < 2 {
            return None;
        }
        Some(present)
    }

    /// Strict best scan over (index, value) pairs; `None` when the top
    /// two are within epsilon of each other.
    fn strict_best(present: &[(usize, f64)], higher_better: bool) -> Option<(usize, f64, f64)> {
        let better = |a: f64, b: f64| {
            if higher_better {
                a > b
            } else {
                a < b
            }
        };
        let mut best: Option<(usize, f64)> = None;
        let mut runner_up: Option<f64> = None;
        for (i, v) in present.iter().copied() {
            match best {
                None => best = Some((i, v)),
                Some((_, bv)) if better(v, bv) => {
                    runner_up = Some(bv);
                    best = Some((i, v));
                }
                Some(_) => {
                    runner_up = match runner_up {
                        Some(r) if !better(v, r) => Some(r),
                        _ => Some(v),
                    };
                }
            }
        }
        let (idx, best_value) = best?;
        let runner_up = runner_up?;
        if approx_eq(best_value, runner_up) {
            // Shared best value: nobody wins.
            return None;
        }
        Some((idx, best_value, runner_up))
    }

    fn evaluate_numeric(
        &self,
        def: &SpecDefinition,
        products: &[ProductRecord],
    ) -> Option<(usize, Advantage)> {
        let present = self.present_values(def, self.numeric_values(def, products))?;
        let (winner, best, runner_up) = Self::strict_best(&present, def.higher_better)?;

        let headline = match LabelStyle::for_spec(def) {
            LabelStyle::Weight => "Lightest".to_string(),
            _ => text::capitalize(&format!("best {}", def.label)),
        };
        let advantage = Advantage::new(
            headline,
            text::versus(
                &text::format_value(best, def.unit),
                &text::format_value(runner_up, def.unit),
            ),
            def.key,
        );
        Some((winner, advantage))
    }

    fn evaluate_ranked(
        &self,
        def: &SpecDefinition,
        products: &[ProductRecord],
        table_name: &str,
    ) -> Option<(usize, Advantage)> {
        let table = self.rankings.table(table_name)?;
        let raw: Vec<Option<&str>> = products
            .iter()
            .map(|p| self.resolver.resolve(p, def.key).and_then(SpecValue::as_str))
            .collect();
        if def.require_all && raw.iter().any(Option::is_none) {
            return None;
        }

        let present: Vec<(usize, &str, u32)> = raw
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|s| (i, s, table.rank_of(s))))
            .collect();
        if present.len() < 2 {
            return None;
        }

        let best_rank = present.iter().map(|(_, _, r)| *r).min()?;
        let mut at_best = present.iter().filter(|(_, _, r)| *r == best_rank);
        let (winner, winner_str, _) = at_best.next()?;
        if at_best.next().is_some() {
            return None;
        }
        let runner_up = present
            .iter()
            .filter(|(_, _, r)| *r != best_rank)
            .min_by_key(|(_, _, r)| *r)
            .map(|(_, s, _)| *s)?;

        let advantage = Advantage::new(
            text::capitalize(&format!("best {}", def.label)),
            text::versus(winner_str, runner_up),
            def.key,
        );
        Some((*winner, advantage))
    }

    fn evaluate_boolean(
        &self,
        def: &SpecDefinition,
        products: &[ProductRecord],
    ) -> Option<(usize, Advantage)> {
        let truthy: Vec<usize> = products
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                self.resolver
                    .resolve(p, def.key)
                    .map(SpecValue::as_bool_loose)
                    .unwrap_or(false)
            })
            .map(|(i, _)| i)
            .collect();

        // Only a sole holder of the feature stands out.
        if truthy.len() != 1 {
            return None;
        }
        let advantage = Advantage::new(
            text::capitalize(&format!("has {}", def.label)),
            text::versus("Yes", "No"),
            def.key,
        );
        Some((truthy[0], advantage))
    }

    fn evaluate_feature_count(
        &self,
        def: &SpecDefinition,
        products: &[ProductRecord],
        min_notable: u32,
    ) -> Option<(usize, Advantage)> {
        let counts: Vec<Option<f64>> = products
            .iter()
            .map(|p| {
                self.resolver.resolve(p, def.key).map(|v| match v.as_list() {
                    Some(items) => items.len() as f64,
                    None => v.as_f64().unwrap_or(0.0).max(0.0),
                })
            })
            .collect();
        let present = self.present_values(def, counts)?;
        let (winner, best, runner_up) = Self::strict_best(&present, true)?;
        if (best as u32) < min_notable {
            trace!(spec = def.key, count = best, "feature count below notability floor");
            return None;
        }
        let advantage = Advantage::new(
            text::capitalize(&format!("most {}", def.label)),
            text::versus(&format!("{}", best as u32), &format!("{}", runner_up as u32)),
            def.key,
        );
        Some((winner, advantage))
    }

    fn evaluate_motor_count(
        &self,
        def: &SpecDefinition,
        products: &[ProductRecord],
    ) -> Option<(usize, Advantage)> {
        let present = self.present_values(def, self.numeric_values(def, products))?;
        let (winner, best, runner_up) = Self::strict_best(&present, true)?;
        let headline = if best as u32 == 2 {
            "Dual motors".to_string()
        } else {
            "Most motors".to_string()
        };
        let advantage = Advantage::new(
            headline,
            text::versus(&format!("{}", best as u32), &format!("{}", runner_up as u32)),
            def.key,
        );
        Some((winner, advantage))
    }

    fn evaluate_best_type(
        &self,
        def: &SpecDefinition,
        products: &[ProductRecord],
        scorer: BestTypeScorer,
    ) -> Option<(usize, Advantage)> {
        let score = |raw: &str| match scorer {
            BestTypeScorer::Suspension => suspension_score(raw),
            BestTypeScorer::IpRating => IpRating::parse(raw).score(),
        };
        let raw: Vec<Option<&str>> = products
            .iter()
            .map(|p| self.resolver.resolve(p, def.key).and_then(SpecValue::as_str))
            .collect();
        if def.require_all && raw.iter().any(Option::is_none) {
            return None;
        }
        let present: Vec<(usize, &str, u32)> = raw
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|s| (i, s, score(s))))
            .collect();
        if present.len() < 2 {
            return None;
        }

        let best_score = present.iter().map(|(_, _, sc)| *sc).max()?;
        let mut at_best = present.iter().filter(|(_, _, sc)| *sc == best_score);
        let (winner, winner_str, _) = at_best.next()?;
        if at_best.next().is_some() {
            return None;
        }
        let runner_up = present
            .iter()
            .filter(|(_, _, sc)| *sc != best_score)
            .max_by_key(|(_, _, sc)| *sc)
            .map(|(_, s, _)| *s)?;

        let advantage = Advantage::new(
            text::capitalize(&format!("best {}", def.label)),
            text::versus(winner_str, runner_up),
            def.key,
        );
        Some((*winner, advantage))
    }

    /// Category-score awards: strict max above the absolute floor.
    fn category_awards(&self, products: &[ProductRecord]) -> Vec<(usize, Advantage)> {
        let mut awards = Vec::new();
        for category in &self.catalog.score_categories {
            let scores: Vec<(usize, f64)> = products
                .iter()
                .enumerate()
                .filter_map(|(i, p)| p.category_score(category.category).map(|s| (i, s)))
                .collect();
            if scores.len() < 2 {
                continue;
            }
            let Some((winner, best, runner_up)) = Self::strict_best(&scores, true) else {
                trace!(category = category.category, "category award tied, suppressed");
                continue;
            };
            if best < self.settings.category_floor {
                trace!(
                    category = category.category,
                    score = best,
                    "category award under absolute floor"
                );
                continue;
            }

            let mut advantage = Advantage::new(
                category.award_label,
                format!("{:.0} vs. {:.0} {} score", best, runner_up, category.label),
                format!("scores.{}", category.category),
            );
            // Detail comes from the winner's raw specs so two awards
            // never read identically.
            if let Some(detail) = (category.detail)(&products[winner], &self.resolver) {
                advantage = advantage.with_tooltip(detail);
            }
            awards.push((winner, advantage));
        }
        awards
    }
}
