//! Head-to-head comparison of exactly two products.
//!
//! Walks the catalog in priority order, composites first. A decisive
//! composite emits one consolidated verdict and consumes its child
//! specs; a close composite steps aside and lets the children compete
//! individually. Each side accepts at most `max_advantages` entries,
//! first-come in priority order.

use tracing::{debug, trace};

use crate::domain::catalog::{
    BestTypeScorer, CompositeSpec, RankingSet, SpecCatalog, SpecDefinition, SpecKind,
};
use crate::domain::foundation::{approx_eq, ProductType};
use crate::domain::spec::{ProductRecord, SpecValue, ValueResolver};

use super::scoring::{suspension_score, IpRating};
use super::text;
use super::{Advantage, ComparisonSettings};

/// Advantages per side for a two-product comparison.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeadToHeadResult {
    pub advantages: [Vec<Advantage>; 2],
}

/// Pairwise comparator for one product type.
pub struct HeadToHeadComparator<'a> {
    catalog: &'a SpecCatalog,
    rankings: &'a RankingSet,
    settings: &'a ComparisonSettings,
    resolver: ValueResolver,
}

/// Comparison state threaded through the pass steps.
#[derive(Debug, Clone, Default)]
struct PassState {
    sides: [Vec<Advantage>; 2],
    handled: Vec<&'static str>,
}

impl PassState {
    fn can_add(&self, side: usize, settings: &ComparisonSettings) -> bool {
        self.sides[side].len() < settings.max_advantages
    }

    fn both_full(&self, settings: &ComparisonSettings) -> bool {
        !self.can_add(0, settings) && !self.can_add(1, settings)
    }

    fn is_handled(&self, key: &str) -> bool {
        self.handled.iter().any(|k| *k == key)
    }

    fn push(mut self, side: usize, advantage: Advantage, settings: &ComparisonSettings) -> Self {
        if self.can_add(side, settings) {
            self.sides[side].push(advantage);
        }
        self
    }

    fn mark_handled(mut self, keys: &'static [&'static str]) -> Self {
        self.handled.extend_from_slice(keys);
        self
    }
}

impl<'a> HeadToHeadComparator<'a> {
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

    /// Compares a product list, degrading on structural misuse: any
    /// input other than exactly two products yields empty lists sized
    /// to the input.
    pub fn compare(&self, products: &[ProductRecord]) -> Vec<Vec<Advantage>> {
        if products.len() != 2 {
            debug!(count = products.len(), "head-to-head requires exactly 2 products");
            return vec![Vec::new(); products.len()];
        }
        let result = self.compare_pair(&products[0], &products[1]);
        result.advantages.into_iter().collect()
    }

    /// Compares exactly two products.
    pub fn compare_pair(&self, a: &ProductRecord, b: &ProductRecord) -> HeadToHeadResult {
        let mut state = PassState::default();

        for composite in &self.catalog.composites {
            if state.both_full(self.settings) {
                break;
            }
            state = self.apply_composite(composite, a, b, state);
        }

        for def in &self.catalog.comparison_specs {
            if state.both_full(self.settings) {
                break;
            }
            if state.is_handled(def.key) {
                continue;
            }
            if let Some((winner, advantage)) = self.evaluate(def, a, b) {
                state = state.push(winner, advantage, self.settings);
            }
        }

        HeadToHeadResult {
            advantages: state.sides,
        }
    }

    /// Composite step: one consolidated verdict when the category
    /// scores are decisive, otherwise the children stay in play.
    fn apply_composite(
        &self,
        composite: &CompositeSpec,
        a: &ProductRecord,
        b: &ProductRecord,
        state: PassState,
    ) -> PassState {
        let (score_a, score_b) = match (
            a.category_score(composite.category),
            b.category_score(composite.category),
        ) {
            (Some(sa), Some(sb)) => (sa, sb),
            _ => {
                trace!(category = composite.category, "composite skipped: missing scores");
                return state;
            }
        };

        let closeness = composite
            .closeness
            .unwrap_or(self.settings.composite_closeness);
        let diff = score_a - score_b;
        if diff.abs() < closeness {
            // Close call: no consolidated verdict, children compete
            // individually later.
            trace!(
                category = composite.category,
                diff,
                "composite close, children stay eligible"
            );
            return state;
        }

        let winner = if diff > 0.0 { 0 } else { 1 };
        let loser = 1 - winner;
        let (winner_record, loser_record) = if winner == 0 { (a, b) } else { (b, a) };
        let (winner_score, loser_score) = if winner == 0 {
            (score_a, score_b)
        } else {
            (score_b, score_a)
        };

        // Child specs the winner also wins individually become the
        // consolidated tooltip.
        let mut details = Vec::new();
        for child_key in composite.children {
            let Some(child) = self.catalog.comparison_spec(child_key) else {
                continue;
            };
            if let Some((child_winner, adv)) = self.evaluate(child, a, b) {
                if child_winner == winner {
                    details.push(format!("{} ({})", adv.text, adv.comparison));
                }
            }
        }

        let mut advantage = Advantage::new(
            text::capitalize(&format!("better {}", composite.label)),
            format!(
                "{:.0} vs. {:.0} {} score",
                winner_score, loser_score, composite.label
            ),
            format!("scores.{}", composite.category),
        );
        if !details.is_empty() {
            advantage = advantage.with_tooltip(details.join("; "));
        }

        let mut state = state
            .push(winner, advantage, self.settings)
            .mark_handled(composite.children);

        // The losing side gets one more look at each consumed child:
        // an outright child win still earns it an individual line.
        for child_key in composite.children {
            let Some(child) = self.catalog.comparison_spec(child_key) else {
                continue;
            };
            if let Some((child_winner, adv)) =
                self.evaluate(child, winner_record, loser_record)
            {
                // evaluate() was called winner-first here, so index 1
                // is the composite loser.
                if child_winner == 1 {
                    state = state.push(loser, adv, self.settings);
                }
            }
        }

        state
    }

    /// Evaluates one spec for both products. Returns the winning side
    /// (0 or 1) and the phrased advantage, or `None` when the spec is
    /// missing, tied, or under threshold.
    fn evaluate(
        &self,
        def: &SpecDefinition,
        a: &ProductRecord,
        b: &ProductRecord,
    ) -> Option<(usize, Advantage)> {
        match &def.kind {
            SpecKind::Numeric { min_diff, pct_threshold, comparative } => {
                self.evaluate_numeric(def, a, b, *min_diff, *pct_threshold, comparative)
            }
            SpecKind::Ranked { table } => self.evaluate_ranked(def, a, b, table),
            SpecKind::Boolean => self.evaluate_boolean(def, a, b),
            SpecKind::FeatureCount { min_notable, min_diff } => {
                self.evaluate_feature_count(def, a, b, *min_notable, *min_diff)
            }
            SpecKind::MotorCount => self.evaluate_motor_count(def, a, b),
            SpecKind::BestType { scorer } => self.evaluate_best_type(def, a, b, *scorer),
            // Analysis-only kinds never appear in comparison catalogs.
            SpecKind::ScoreBased { .. }
            | SpecKind::AbsoluteBands { .. }
            | SpecKind::Descriptive { .. }
            | SpecKind::Derived { .. } => None,
        }
    }

    fn evaluate_numeric(
        &self,
        def: &SpecDefinition,
        a: &ProductRecord,
        b: &ProductRecord,
        min_diff: Option<f64>,
        pct_threshold: Option<f64>,
        comparative: &str,
    ) -> Option<(usize, Advantage)> {
        let va = self.resolve_numeric(a, def)?;
        let vb = self.resolve_numeric(b, def)?;
        if approx_eq(va, vb) {
            return None;
        }

        let diff = va - vb;
        if !self.numeric_gate(va, vb, min_diff, pct_threshold) {
            trace!(spec = def.key, diff, "numeric difference under threshold");
            return None;
        }

        let winner = if (diff > 0.0) == def.higher_better { 0 } else { 1 };
        let (winner_value, loser_value) = if winner == 0 { (va, vb) } else { (vb, va) };

        let advantage = Advantage::new(
            text::numeric_advantage_text(diff, def.unit, comparative),
            text::versus(
                &text::format_value(winner_value, def.unit),
                &text::format_value(loser_value, def.unit),
            ),
            def.key,
        );
        Some((winner, advantage))
    }

    /// Significance gate: an absolute `min_diff` when declared, else a
    /// relative threshold against the smaller magnitude.
    fn numeric_gate(
        &self,
        va: f64,
        vb: f64,
        min_diff: Option<f64>,
        pct_threshold: Option<f64>,
    ) -> bool {
        let diff = (va - vb).abs();
        if let Some(min) = min_diff {
            if diff >= min {
                return true;
            }
        }
        let base = va.abs().min(vb.abs());
        if base <= 0.0 {
            // Against a zero base any difference is total; let it pass.
            return true;
        }
        let pct = diff / base * 100.0;
        pct >= pct_threshold.unwrap_or(self.settings.pct_threshold)
    }

    fn evaluate_ranked(
        &self,
        def: &SpecDefinition,
        a: &ProductRecord,
        b: &ProductRecord,
        table_name: &str,
    ) -> Option<(usize, Advantage)> {
        let sa = self.resolver.resolve(a, def.key)?.as_str()?;
        let sb = self.resolver.resolve(b, def.key)?.as_str()?;
        let table = self.rankings.table(table_name)?;

        let ra = table.rank_of(sa);
        let rb = table.rank_of(sb);
        if ra == rb {
            // Equal rank covers genuine ties and two unmapped values
            // both landing on the fallback.
            return None;
        }

        let winner = if ra < rb { 0 } else { 1 };
        let (winner_str, loser_str) = if winner == 0 { (sa, sb) } else { (sb, sa) };
        let advantage = Advantage::new(
            text::capitalize(&format!("better {}", def.label)),
            text::versus(winner_str, loser_str),
            def.key,
        );
        Some((winner, advantage))
    }

    fn evaluate_boolean(
        &self,
        def: &SpecDefinition,
        a: &ProductRecord,
        b: &ProductRecord,
    ) -> Option<(usize, Advantage)> {
        let va = self.resolver.resolve(a, def.key)?.as_bool_loose();
        let vb = self.resolver.resolve(b, def.key)?.as_bool_loose();
        if va == vb {
            return None;
        }
        let winner = if va { 0 } else { 1 };
        let advantage = Advantage::new(
            text::capitalize(&format!("has {}", def.label)),
            text::versus("Yes", "No"),
            def.key,
        );
        Some((winner, advantage))
    }

    fn evaluate_feature_count(
        &self,
        def: &SpecDefinition,
        a: &ProductRecord,
        b: &ProductRecord,
        min_notable: u32,
        min_diff: u32,
    ) -> Option<(usize, Advantage)> {
        let ca = self.count_of(a, def)?;
        let cb = self.count_of(b, def)?;
        if ca == cb {
            return None;
        }
        if ca.max(cb) < min_notable || ca.abs_diff(cb) < min_diff {
            return None;
        }
        let winner = if ca > cb { 0 } else { 1 };
        let (cw, cl) = if winner == 0 { (ca, cb) } else { (cb, ca) };
        let advantage = Advantage::new(
            text::capitalize(&format!("more {}", def.label)),
            text::versus(&cw.to_string(), &cl.to_string()),
            def.key,
        );
        Some((winner, advantage))
    }

    fn evaluate_motor_count(
        &self,
        def: &SpecDefinition,
        a: &ProductRecord,
        b: &ProductRecord,
    ) -> Option<(usize, Advantage)> {
        let ca = self.resolve_numeric(a, def)? as u32;
        let cb = self.resolve_numeric(b, def)? as u32;
        if ca == cb {
            return None;
        }
        let winner = if ca > cb { 0 } else { 1 };
        let (cw, cl) = if winner == 0 { (ca, cb) } else { (cb, ca) };
        let headline = if cw == 2 && cl == 1 {
            "Dual motors".to_string()
        } else {
            "More motors".to_string()
        };
        let advantage = Advantage::new(
            headline,
            text::versus(&cw.to_string(), &cl.to_string()),
            def.key,
        );
        Some((winner, advantage))
    }

    fn evaluate_best_type(
        &self,
        def: &SpecDefinition,
        a: &ProductRecord,
        b: &ProductRecord,
        scorer: BestTypeScorer,
    ) -> Option<(usize, Advantage)> {
        let sa = self.resolver.resolve(a, def.key)?.as_str()?;
        let sb = self.resolver.resolve(b, def.key)?.as_str()?;
        let score = |raw: &str| match scorer {
            BestTypeScorer::Suspension => suspension_score(raw),
            BestTypeScorer::IpRating => IpRating::parse(raw).score(),
        };
        let (score_a, score_b) = (score(sa), score(sb));
        if score_a == score_b {
            return None;
        }
        let winner = if score_a > score_b { 0 } else { 1 };
        let (winner_str, loser_str) = if winner == 0 { (sa, sb) } else { (sb, sa) };
        let advantage = Advantage::new(
            text::capitalize(&format!("better {}", def.label)),
            text::versus(winner_str, loser_str),
            def.key,
        );
        Some((winner, advantage))
    }

    fn resolve_numeric(&self, record: &ProductRecord, def: &SpecDefinition) -> Option<f64> {
        self.resolver
            .resolve_with_fallback(record, def.key, def.fallback_key)
            .and_then(SpecValue::as_f64)
    }

    fn count_of(&self, record: &ProductRecord, def: &SpecDefinition) -> Option<u32> {
        let value = self
            .resolver
            .resolve_with_fallback(record, def.key, def.fallback_key)?;
        if let Some(items) = value.as_list() {
            return Some(items.len() as u32);
        }
        value.as_f64().map(|n| n.max(0.0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::RANKINGS;
    use serde_json::json;

    fn settings() -> ComparisonSettings {
        ComparisonSettings::default()
    }

    fn ebike(name: &str, specs: serde_json::Value) -> ProductRecord {
        ProductRecord::new(name, SpecValue::from_json(specs))
    }

    fn comparator<'a>(
        catalog: &'a SpecCatalog,
        settings: &'a ComparisonSettings,
    ) -> HeadToHeadComparator<'a> {
        HeadToHeadComparator::new(catalog, &RANKINGS, settings)
    }

    fn ebike_catalog() -> &'static SpecCatalog {
        SpecCatalog::for_type(ProductType::EBike)
    }

    fn find_spec<'a>(result: &'a HeadToHeadResult, side: usize, key: &str) -> Option<&'a Advantage> {
        result.advantages[side].iter().find(|a| a.spec_key == key)
    }

    #[test]
    fn torque_below_relative_threshold_is_skipped() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike("A", json!({ "motor": { "torque": 80 } }));
        let b = ebike("B", json!({ "motor": { "torque": 81 } }));

        let result = cmp.compare_pair(&a, &b);
        assert!(find_spec(&result, 0, "motor.torque").is_none());
        assert!(find_spec(&result, 1, "motor.torque").is_none());
    }

    #[test]
    fn torque_above_threshold_wins_for_higher_side() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike("A", json!({ "motor": { "torque": 80 } }));
        let b = ebike("B", json!({ "motor": { "torque": 90 } }));

        let result = cmp.compare_pair(&a, &b);
        let adv = find_spec(&result, 1, "motor.torque").expect("90 Nm side should win");
        assert_eq!(adv.text, "10 Nm more torque");
        assert_eq!(adv.comparison, "90 Nm vs. 80 Nm");
        assert!(find_spec(&result, 0, "motor.torque").is_none());
    }

    #[test]
    fn lighter_product_wins_weight() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike("A", json!({ "weight": 48 }));
        let b = ebike("B", json!({ "weight": 62 }));

        let result = cmp.compare_pair(&a, &b);
        let adv = find_spec(&result, 0, "weight").expect("lighter side should win");
        assert_eq!(adv.text, "14 lbs lighter");
        assert_eq!(adv.comparison, "48 lbs vs. 62 lbs");
    }

    #[test]
    fn missing_value_skips_spec() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike("A", json!({ "motor": { "torque": 80 } }));
        let b = ebike("B", json!({}));

        let result = cmp.compare_pair(&a, &b);
        assert!(find_spec(&result, 0, "motor.torque").is_none());
    }

    #[test]
    fn equal_values_within_epsilon_are_ties() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike("A", json!({ "top_speed": 28.0 }));
        let b = ebike("B", json!({ "top_speed": 28.0005 }));

        let result = cmp.compare_pair(&a, &b);
        assert!(find_spec(&result, 0, "top_speed").is_none());
        assert!(find_spec(&result, 1, "top_speed").is_none());
    }

    #[test]
    fn ranked_brand_beats_unmapped_brand() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike("A", json!({ "motor": { "brand": "Acme" } }));
        let b = ebike("B", json!({ "motor": { "brand": "Bosch" } }));

        let result = cmp.compare_pair(&a, &b);
        let adv = find_spec(&result, 1, "motor.brand").expect("Bosch should win");
        assert_eq!(adv.text, "Better motor brand");
        assert_eq!(adv.comparison, "Bosch vs. Acme");
    }

    #[test]
    fn two_unmapped_brands_tie_on_fallback_rank() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike("A", json!({ "motor": { "brand": "Acme" } }));
        let b = ebike("B", json!({ "motor": { "brand": "Zenith" } }));

        let result = cmp.compare_pair(&a, &b);
        assert!(find_spec(&result, 0, "motor.brand").is_none());
        assert!(find_spec(&result, 1, "motor.brand").is_none());
    }

    #[test]
    fn boolean_spec_goes_to_truthy_side() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike("A", json!({ "battery": { "removable": "yes" } }));
        let b = ebike("B", json!({ "battery": { "removable": false } }));

        let result = cmp.compare_pair(&a, &b);
        let adv = find_spec(&result, 0, "battery.removable").expect("truthy side wins");
        assert_eq!(adv.text, "Has removable battery");
        assert_eq!(adv.comparison, "Yes vs. No");
    }

    #[test]
    fn per_side_cap_is_respected() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        // A wins everything by wide margins.
        let a = ebike(
            "A",
            json!({
                "motor": { "torque": 100, "power": 750, "brand": "Bosch" },
                "battery": { "capacity": 900, "removable": true },
                "range": { "tested": 70 },
                "top_speed": 32,
                "weight": 45,
                "max_load": 350,
                "gears": 12,
                "suspension": { "travel": 140 },
                "tires": { "width": 4.0 },
                "lights": { "integrated": true },
            }),
        );
        let b = ebike(
            "B",
            json!({
                "motor": { "torque": 50, "power": 250, "brand": "Acme" },
                "battery": { "capacity": 360, "removable": false },
                "range": { "tested": 30 },
                "top_speed": 20,
                "weight": 70,
                "max_load": 250,
                "gears": 7,
                "suspension": { "travel": 60 },
                "tires": { "width": 2.2 },
                "lights": { "integrated": false },
            }),
        );

        let result = cmp.compare_pair(&a, &b);
        assert!(result.advantages[0].len() <= s.max_advantages);
        assert!(result.advantages[1].len() <= s.max_advantages);
        assert_eq!(result.advantages[0].len(), s.max_advantages);
    }

    #[test]
    fn decisive_composite_consumes_children() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike(
            "A",
            json!({
                "scores": { "motor": 85 },
                "motor": { "torque": 95, "power": 750 },
            }),
        );
        let b = ebike(
            "B",
            json!({
                "scores": { "motor": 60 },
                "motor": { "torque": 60, "power": 500 },
            }),
        );

        let result = cmp.compare_pair(&a, &b);
        let composite = find_spec(&result, 0, "scores.motor").expect("composite verdict");
        assert_eq!(composite.text, "Better motor system");
        let tooltip = composite.tooltip.as_deref().expect("per-child details");
        assert!(tooltip.contains("more torque"));
        // Children were consumed by the composite.
        assert!(find_spec(&result, 0, "motor.torque").is_none());
        assert!(find_spec(&result, 0, "motor.power").is_none());
    }

    #[test]
    fn close_composite_leaves_children_eligible() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike(
            "A",
            json!({
                "scores": { "motor": 80 },
                "motor": { "torque": 95 },
            }),
        );
        let b = ebike(
            "B",
            json!({
                "scores": { "motor": 78 },
                "motor": { "torque": 60 },
            }),
        );

        let result = cmp.compare_pair(&a, &b);
        assert!(find_spec(&result, 0, "scores.motor").is_none());
        assert!(find_spec(&result, 0, "motor.torque").is_some());
    }

    #[test]
    fn composite_loser_keeps_outright_child_wins() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        // A wins the motor category overall, but B has clearly more
        // torque and must keep that individual line.
        let a = ebike(
            "A",
            json!({
                "scores": { "motor": 90 },
                "motor": { "torque": 60, "power": 750 },
            }),
        );
        let b = ebike(
            "B",
            json!({
                "scores": { "motor": 62 },
                "motor": { "torque": 90, "power": 500 },
            }),
        );

        let result = cmp.compare_pair(&a, &b);
        assert!(find_spec(&result, 0, "scores.motor").is_some());
        let loser_line = find_spec(&result, 1, "motor.torque").expect("loser second chance");
        assert_eq!(loser_line.text, "30 Nm more torque");
        // But the loser's power deficit stays consumed.
        assert!(find_spec(&result, 1, "motor.power").is_none());
    }

    #[test]
    fn compare_degrades_on_wrong_product_count() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike("A", json!({ "weight": 50 }));

        let one = cmp.compare(std::slice::from_ref(&a));
        assert_eq!(one.len(), 1);
        assert!(one[0].is_empty());

        let three = cmp.compare(&[a.clone(), a.clone(), a.clone()]);
        assert_eq!(three.len(), 3);
        assert!(three.iter().all(Vec::is_empty));
    }

    #[test]
    fn comparison_is_idempotent() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike(
            "A",
            json!({ "motor": { "torque": 90 }, "weight": 50, "top_speed": 28 }),
        );
        let b = ebike(
            "B",
            json!({ "motor": { "torque": 75 }, "weight": 58, "top_speed": 25 }),
        );

        let first = cmp.compare_pair(&a, &b);
        let second = cmp.compare_pair(&a, &b);
        assert_eq!(first, second);
    }

    #[test]
    fn manufacturer_range_fallback_applies() {
        let s = settings();
        let cmp = comparator(ebike_catalog(), &s);
        let a = ebike("A", json!({ "range": { "manufacturer": 60 } }));
        let b = ebike("B", json!({ "range": { "tested": 40 } }));

        let result = cmp.compare_pair(&a, &b);
        let adv = find_spec(&result, 0, "range.tested").expect("fallback value compared");
        assert_eq!(adv.comparison, "60 mi vs. 40 mi");
    }

    #[test]
    fn suspension_best_type_in_scooter_head_to_head() {
        let s = settings();
        let catalog = SpecCatalog::for_type(ProductType::EScooter);
        let cmp = comparator(catalog, &s);
        let a = ProductRecord::new(
            "A",
            SpecValue::from_json(json!({ "suspension": "dual hydraulic" })),
        );
        let b = ProductRecord::new(
            "B",
            SpecValue::from_json(json!({ "suspension": "front spring" })),
        );

        let result = cmp.compare_pair(&a, &b);
        let adv = find_spec(&result, 0, "suspension").expect("dual suspension wins");
        assert_eq!(adv.text, "Better suspension");
        assert_eq!(adv.comparison, "dual hydraulic vs. front spring");
    }
}
