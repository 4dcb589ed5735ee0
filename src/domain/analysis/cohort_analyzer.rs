//! Single-vs-cohort analysis: strengths and weaknesses of one product
//! against its peer group.
//!
//! The analyzer is pure: product, cohort, and mode context go in, a
//! [`CohortAnalysis`] comes out. The bracket/fallback state machine
//! that decides which cohort to pass lives in the application layer.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::catalog::{DescriptiveClassifier, SpecCatalog, SpecDefinition, SpecKind};
use crate::domain::comparison::scoring::IpRating;
use crate::domain::comparison::{stats, text, ComparisonSettings, LabelStyle};
use crate::domain::foundation::{pct_diff, GeoCode, Percentile};
use crate::domain::spec::{ProductRecord, SpecValue, ValueResolver};

use super::{AnalysisItem, CohortAnalysis, CohortFallback, ComparisonMode, PriceBracket};

/// The shared advantage/weakness significance rule.
///
/// Thresholds are configuration owned by the pricing layer, not this
/// module; the analyzer treats the rule as a black box.
pub trait SignificancePolicy {
    fn is_advantage(&self, percentile: f64, pct_vs_avg: f64, higher_better: bool) -> bool;
    fn is_weakness(&self, percentile: f64, pct_vs_avg: f64, higher_better: bool) -> bool;
}

/// Verdict for one analysis spec.
enum Verdict {
    Advantage(AnalysisItem),
    Weakness(AnalysisItem),
    None,
}

/// Cohort analyzer for one product type.
pub struct SingleVsCohortAnalyzer<'a> {
    catalog: &'a SpecCatalog,
    settings: &'a ComparisonSettings,
    resolver: ValueResolver,
}

impl<'a> SingleVsCohortAnalyzer<'a> {
    /// Creates an analyzer over a catalog and settings.
    pub fn new(catalog: &'a SpecCatalog, settings: &'a ComparisonSettings) -> Self {
        Self {
            catalog,
            settings,
            resolver: ValueResolver::new(catalog.product_type),
        }
    }

    /// Analyzes one product against its comparison set.
    ///
    /// `cohort` is the full comparison set and may include the product
    /// itself; it is excluded from peer statistics by name. `mode`,
    /// `bracket`, and `fallback` describe how the set was chosen and
    /// pass through to the output.
    #[allow(clippy::too_many_arguments)]
    pub fn analyze(
        &self,
        product: &ProductRecord,
        cohort: &[ProductRecord],
        geo: &GeoCode,
        policy: &dyn SignificancePolicy,
        mode: ComparisonMode,
        bracket: Option<PriceBracket>,
        fallback: Option<CohortFallback>,
    ) -> CohortAnalysis {
        let peers: Vec<&ProductRecord> = cohort.iter().filter(|p| p.name != product.name).collect();
        let products_in_set = peers.len() + 1;

        let mut advantages = Vec::new();
        let mut weaknesses = Vec::new();

        for def in &self.catalog.analysis_specs {
            match self.classify(def, product, &peers, geo, policy) {
                Verdict::Advantage(item) => advantages.push(item),
                Verdict::Weakness(item) => weaknesses.push(item),
                Verdict::None => {}
            }
        }

        // Strongest signal first on both lists.
        advantages.sort_by(|a, b| {
            b.percentile
                .value()
                .partial_cmp(&a.percentile.value())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        weaknesses.sort_by(|a, b| {
            a.percentile
                .value()
                .partial_cmp(&b.percentile.value())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        CohortAnalysis {
            advantages,
            weaknesses,
            comparison_mode: mode,
            bracket,
            products_in_set,
            cohort_avg_scores: self.average_scores(product, &peers),
            fallback,
        }
    }

    /// Dispatches one analysis spec to its classifier.
    fn classify(
        &self,
        def: &SpecDefinition,
        product: &ProductRecord,
        peers: &[&ProductRecord],
        geo: &GeoCode,
        policy: &dyn SignificancePolicy,
    ) -> Verdict {
        match &def.kind {
            SpecKind::ScoreBased { category } => self.classify_score(def, category, product, peers),
            SpecKind::Descriptive { classifier } => {
                self.classify_descriptive(def, *classifier, product, peers)
            }
            SpecKind::AbsoluteBands {
                advantage_at,
                weakness_at,
            } => self.classify_absolute(def, *advantage_at, *weakness_at, product, peers),
            SpecKind::Derived {
                numerator,
                denominator,
            } => {
                let extract = |record: &ProductRecord| {
                    self.resolver.derived_ratio(record, numerator, denominator)
                };
                self.classify_relative(def, product, peers, policy, &extract)
            }
            _ => {
                let extract = |record: &ProductRecord| self.spec_value(record, def, geo);
                self.classify_relative(def, product, peers, policy, &extract)
            }
        }
    }

    /// Resolves a numeric analysis value, honoring geo scoping and the
    /// manufacturer fallback.
    fn spec_value(&self, record: &ProductRecord, def: &SpecDefinition, geo: &GeoCode) -> Option<f64> {
        if def.key.starts_with("value_metrics.") {
            return self.resolver.resolve_number_for_geo(record, geo, def.key);
        }
        self.resolver
            .resolve_with_fallback(record, def.key, def.fallback_key)
            .and_then(SpecValue::as_f64)
    }

    /// Default path: percentile/rank against the cohort, classified by
    /// the injected significance policy, with sanity and domain
    /// overrides.
    fn classify_relative(
        &self,
        def: &SpecDefinition,
        product: &ProductRecord,
        peers: &[&ProductRecord],
        policy: &dyn SignificancePolicy,
        extract: &dyn Fn(&ProductRecord) -> Option<f64>,
    ) -> Verdict {
        let Some(value) = extract(product) else {
            return Verdict::None;
        };
        let peer_values: Vec<f64> = peers.iter().filter_map(|p| extract(p)).collect();
        if peer_values.len() < self.settings.min_cohort_size {
            trace!(spec = def.key, peers = peer_values.len(), "cohort too small");
            return Verdict::None;
        }

        let mut all_values = peer_values.clone();
        all_values.push(value);
        if !stats::has_variance(&all_values) {
            trace!(spec = def.key, "cohort has no variance");
            return Verdict::None;
        }

        let percentile = stats::percentile_among(value, &peer_values, def.higher_better);
        let rank = stats::rank_among(value, &peer_values, def.higher_better);
        let avg = match stats::mean(&peer_values) {
            Some(avg) => avg,
            None => return Verdict::None,
        };
        let pct_vs_avg = pct_diff(value, avg).unwrap_or(0.0);

        let is_best = stats::is_cohort_best(value, &peer_values, def.higher_better);
        let is_worst = stats::is_cohort_worst(value, &peer_values, def.higher_better);
        let style = LabelStyle::for_spec(def);

        let item = |text: String| AnalysisItem {
            spec_key: def.key.to_string(),
            label: def.label.to_string(),
            product_value: value,
            cohort_avg: Some(avg),
            unit: def.unit.map(str::to_string),
            percentile,
            pct_vs_avg,
            text,
            comparison: format!(
                "{} vs. {} category average",
                text::format_value(value, def.unit),
                text::format_value(avg, def.unit)
            ),
            tooltip: def.tooltip.map(str::to_string),
        };

        if policy.is_advantage(percentile.value(), pct_vs_avg, def.higher_better) {
            // The cohort's worst value can never be sold as a strength.
            if is_worst {
                trace!(spec = def.key, "sanity override: cohort worst not an advantage");
                return Verdict::None;
            }
            return Verdict::Advantage(item(text::advantage_label(
                style,
                def.label,
                is_best || rank.is_best(),
                percentile,
                pct_vs_avg,
            )));
        }

        if policy.is_weakness(percentile.value(), pct_vs_avg, def.higher_better) {
            // Mirror sanity override: the cohort's best value is not a
            // weakness, whatever the percentile arithmetic says.
            if is_best {
                trace!(spec = def.key, "sanity override: cohort best not a weakness");
                return Verdict::None;
            }
            if (self.catalog.weakness_override)(def.key, value) {
                trace!(spec = def.key, value, "domain override suppressed weakness");
                return Verdict::None;
            }
            return Verdict::Weakness(item(text::weakness_label(
                style,
                def.label,
                is_worst || rank.is_worst(),
                percentile,
                pct_vs_avg,
            )));
        }

        Verdict::None
    }

    /// Score-based path: category score against the cohort average,
    /// gated and tiered by fixed score bands.
    fn classify_score(
        &self,
        def: &SpecDefinition,
        category: &str,
        product: &ProductRecord,
        peers: &[&ProductRecord],
    ) -> Verdict {
        let Some(score) = product.category_score(category) else {
            return Verdict::None;
        };
        let peer_scores: Vec<f64> = peers.iter().filter_map(|p| p.category_score(category)).collect();
        if peer_scores.len() < self.settings.min_cohort_size {
            return Verdict::None;
        }
        let avg = match stats::mean(&peer_scores) {
            Some(avg) => avg,
            None => return Verdict::None,
        };

        let diff = score - avg;
        if diff.abs() < self.settings.score_diff_gate {
            return Verdict::None;
        }

        let percentile = stats::percentile_among(score, &peer_scores, true);
        let detail = self
            .catalog
            .score_category(category)
            .and_then(|c| (c.detail)(product, &self.resolver));

        let item = |text: String| AnalysisItem {
            spec_key: def.key.to_string(),
            label: def.label.to_string(),
            product_value: score,
            cohort_avg: Some(avg),
            unit: None,
            percentile,
            pct_vs_avg: pct_diff(score, avg).unwrap_or(0.0),
            text,
            comparison: format!("{:.0} vs. {:.0} category average", score, avg),
            tooltip: detail.clone(),
        };

        if diff > 0.0 {
            Verdict::Advantage(item(text::score_advantage_label(def.label, diff, self.settings)))
        } else {
            Verdict::Weakness(item(text::score_weakness_label(def.label, diff, self.settings)))
        }
    }

    /// Descriptive path: absolute quality bands parsed from a code,
    /// independent of the cohort.
    fn classify_descriptive(
        &self,
        def: &SpecDefinition,
        classifier: DescriptiveClassifier,
        product: &ProductRecord,
        peers: &[&ProductRecord],
    ) -> Verdict {
        match classifier {
            DescriptiveClassifier::WaterResistance => {
                self.classify_water_resistance(def, product, peers)
            }
        }
    }

    fn classify_water_resistance(
        &self,
        def: &SpecDefinition,
        product: &ProductRecord,
        peers: &[&ProductRecord],
    ) -> Verdict {
        let raw = self
            .resolver
            .resolve(product, def.key)
            .and_then(SpecValue::as_str);
        let water = raw.map(|r| IpRating::parse(r).water).unwrap_or(0);

        let peer_waters: Vec<f64> = peers
            .iter()
            .filter_map(|p| self.resolver.resolve(p, def.key).and_then(SpecValue::as_str))
            .map(|r| f64::from(IpRating::parse(r).water))
            .collect();
        let (percentile, cohort_avg) = if peer_waters.len() >= self.settings.min_cohort_size {
            (
                stats::percentile_among(f64::from(water), &peer_waters, true),
                stats::mean(&peer_waters),
            )
        } else {
            (Percentile::new(50.0), None)
        };

        let item = |text: String| AnalysisItem {
            spec_key: def.key.to_string(),
            label: def.label.to_string(),
            product_value: f64::from(water),
            cohort_avg,
            unit: None,
            percentile,
            pct_vs_avg: cohort_avg
                .and_then(|avg| pct_diff(f64::from(water), avg))
                .unwrap_or(0.0),
            text,
            comparison: match raw {
                Some(code) => code.to_uppercase(),
                None => "unrated".to_string(),
            },
            tooltip: def.tooltip.map(str::to_string),
        };

        if water >= 5 {
            let code = raw.unwrap_or_default().to_uppercase();
            Verdict::Advantage(item(format!("Strong water resistance ({})", code)))
        } else if water == 4 {
            Verdict::None
        } else if let Some(code) = raw {
            Verdict::Weakness(item(format!(
                "Limited water resistance ({})",
                code.to_uppercase()
            )))
        } else {
            Verdict::Weakness(item("No water resistance rating".to_string()))
        }
    }

    /// Fixed-band path: advantage/weakness by absolute thresholds,
    /// irrespective of cohort statistics.
    fn classify_absolute(
        &self,
        def: &SpecDefinition,
        advantage_at: f64,
        weakness_at: f64,
        product: &ProductRecord,
        peers: &[&ProductRecord],
    ) -> Verdict {
        let Some(value) = self
            .resolver
            .resolve_with_fallback(product, def.key, def.fallback_key)
            .and_then(SpecValue::as_f64)
        else {
            return Verdict::None;
        };

        let is_advantage = if def.higher_better {
            value >= advantage_at
        } else {
            value <= advantage_at
        };
        let is_weakness = if def.higher_better {
            value <= weakness_at
        } else {
            value >= weakness_at
        };
        if !is_advantage && !is_weakness {
            return Verdict::None;
        }

        // Cohort stats are contextual only; the verdict came from the
        // fixed bands.
        let peer_values: Vec<f64> = peers
            .iter()
            .filter_map(|p| {
                self.resolver
                    .resolve_with_fallback(p, def.key, def.fallback_key)
                    .and_then(SpecValue::as_f64)
            })
            .collect();
        let (percentile, cohort_avg) = if peer_values.len() >= self.settings.min_cohort_size {
            (
                stats::percentile_among(value, &peer_values, def.higher_better),
                stats::mean(&peer_values),
            )
        } else {
            (
                Percentile::new(if is_advantage { 75.0 } else { 25.0 }),
                None,
            )
        };

        let formatted = text::format_value(value, def.unit);
        let item = |text: String| AnalysisItem {
            spec_key: def.key.to_string(),
            label: def.label.to_string(),
            product_value: value,
            cohort_avg,
            unit: def.unit.map(str::to_string),
            percentile,
            pct_vs_avg: cohort_avg.and_then(|avg| pct_diff(value, avg)).unwrap_or(0.0),
            text,
            comparison: formatted.clone(),
            tooltip: def.tooltip.map(str::to_string),
        };

        if is_advantage {
            Verdict::Advantage(item(text::capitalize(&format!(
                "excellent {} ({})",
                def.label, formatted
            ))))
        } else {
            Verdict::Weakness(item(text::capitalize(&format!(
                "limited {} ({})",
                def.label, formatted
            ))))
        }
    }

    /// Average category scores across the whole comparison set.
    fn average_scores(
        &self,
        product: &ProductRecord,
        peers: &[&ProductRecord],
    ) -> BTreeMap<String, f64> {
        let mut averages = BTreeMap::new();
        for category in &self.catalog.score_categories {
            let mut scores: Vec<f64> = peers
                .iter()
                .filter_map(|p| p.category_score(category.category))
                .collect();
            if let Some(own) = product.category_score(category.category) {
                scores.push(own);
            }
            if let Some(avg) = stats::mean(&scores) {
                averages.insert(category.category.to_string(), avg);
            }
        }
        averages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProductType;
    use serde_json::json;

    /// Percentile-band policy standing in for the pricing config.
    struct TestPolicy;

    impl SignificancePolicy for TestPolicy {
        fn is_advantage(&self, percentile: f64, pct_vs_avg: f64, _higher_better: bool) -> bool {
            percentile >= 70.0 || pct_vs_avg.abs() >= 15.0 && percentile > 50.0
        }

        fn is_weakness(&self, percentile: f64, pct_vs_avg: f64, _higher_better: bool) -> bool {
            percentile <= 30.0 || pct_vs_avg.abs() >= 15.0 && percentile < 50.0
        }
    }

    fn geo() -> GeoCode {
        GeoCode::new("us").unwrap()
    }

    fn ebike(name: &str, specs: serde_json::Value) -> ProductRecord {
        ProductRecord::new(name, SpecValue::from_json(specs))
    }

    fn analyzer<'a>(settings: &'a ComparisonSettings) -> SingleVsCohortAnalyzer<'a> {
        SingleVsCohortAnalyzer::new(SpecCatalog::for_type(ProductType::EBike), settings)
    }

    fn analyze(
        settings: &ComparisonSettings,
        product: &ProductRecord,
        cohort: &[ProductRecord],
    ) -> CohortAnalysis {
        analyzer(settings).analyze(
            product,
            cohort,
            &geo(),
            &TestPolicy,
            ComparisonMode::Category,
            None,
            None,
        )
    }

    fn torque_cohort(values: &[f64]) -> Vec<ProductRecord> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| ebike(&format!("Peer {}", i), json!({ "motor": { "torque": v } })))
            .collect()
    }

    fn find<'a>(items: &'a [AnalysisItem], key: &str) -> Option<&'a AnalysisItem> {
        items.iter().find(|i| i.spec_key == key)
    }

    #[test]
    fn top_of_cohort_torque_is_an_advantage() {
        let settings = ComparisonSettings::default();
        let product = ebike("Hero", json!({ "motor": { "torque": 95 } }));
        let cohort = torque_cohort(&[60.0, 70.0, 75.0, 80.0]);

        let result = analyze(&settings, &product, &cohort);
        let item = find(&result.advantages, "motor.torque").expect("torque advantage");
        assert_eq!(item.text, "Best torque in its class");
        assert_eq!(item.percentile, Percentile::HUNDRED);
        assert_eq!(item.cohort_avg, Some(71.25));
    }

    #[test]
    fn bottom_of_cohort_torque_is_a_weakness() {
        let settings = ComparisonSettings::default();
        let product = ebike("Slug", json!({ "motor": { "torque": 40 } }));
        let cohort = torque_cohort(&[60.0, 70.0, 75.0, 80.0]);

        let result = analyze(&settings, &product, &cohort);
        let item = find(&result.weaknesses, "motor.torque").expect("torque weakness");
        assert_eq!(item.text, "Worst torque in its class");
        assert_eq!(item.percentile, Percentile::ZERO);
    }

    #[test]
    fn small_cohort_yields_no_relative_verdict() {
        let settings = ComparisonSettings::default();
        let product = ebike("Hero", json!({ "motor": { "torque": 95 } }));
        let cohort = torque_cohort(&[60.0, 70.0]);

        let result = analyze(&settings, &product, &cohort);
        assert!(find(&result.advantages, "motor.torque").is_none());
        assert!(find(&result.weaknesses, "motor.torque").is_none());
    }

    #[test]
    fn flat_cohort_yields_no_relative_verdict() {
        let settings = ComparisonSettings::default();
        let product = ebike("Same", json!({ "motor": { "torque": 70 } }));
        let cohort = torque_cohort(&[70.0, 70.0, 70.0]);

        let result = analyze(&settings, &product, &cohort);
        assert!(find(&result.advantages, "motor.torque").is_none());
        assert!(find(&result.weaknesses, "motor.torque").is_none());
    }

    #[test]
    fn cohort_best_is_never_a_weakness() {
        let settings = ComparisonSettings::default();

        /// Policy that calls everything a weakness.
        struct HostilePolicy;
        impl SignificancePolicy for HostilePolicy {
            fn is_advantage(&self, _: f64, _: f64, _: bool) -> bool {
                false
            }
            fn is_weakness(&self, _: f64, _: f64, _: bool) -> bool {
                true
            }
        }

        let product = ebike("Hero", json!({ "motor": { "torque": 95 } }));
        let cohort = torque_cohort(&[60.0, 70.0, 75.0]);
        let result = analyzer(&settings).analyze(
            &product,
            &cohort,
            &geo(),
            &HostilePolicy,
            ComparisonMode::Category,
            None,
            None,
        );
        assert!(find(&result.weaknesses, "motor.torque").is_none());
    }

    #[test]
    fn regulated_wattage_is_not_flagged_weak() {
        let settings = ComparisonSettings::default();
        let product = ebike("EU Bike", json!({ "motor": { "power": 250 } }));
        let cohort: Vec<ProductRecord> = [750.0, 750.0, 1000.0, 500.0]
            .iter()
            .enumerate()
            .map(|(i, v)| ebike(&format!("Peer {}", i), json!({ "motor": { "power": v } })))
            .collect();

        let result = analyze(&settings, &product, &cohort);
        assert!(find(&result.weaknesses, "motor.power").is_none());
    }

    #[test]
    fn unregulated_low_wattage_is_flagged_weak() {
        let settings = ComparisonSettings::default();
        let product = ebike("Toy", json!({ "motor": { "power": 200 } }));
        let cohort: Vec<ProductRecord> = [750.0, 750.0, 1000.0, 500.0]
            .iter()
            .enumerate()
            .map(|(i, v)| ebike(&format!("Peer {}", i), json!({ "motor": { "power": v } })))
            .collect();

        let result = analyze(&settings, &product, &cohort);
        assert!(find(&result.weaknesses, "motor.power").is_some());
    }

    #[test]
    fn score_gate_and_tiers() {
        let settings = ComparisonSettings::default();
        let cohort: Vec<ProductRecord> = [70.0, 72.0, 74.0]
            .iter()
            .enumerate()
            .map(|(i, v)| ebike(&format!("Peer {}", i), json!({ "scores": { "motor": v } })))
            .collect();

        // diff = 90 - 72 = +18: strong tier.
        let product = ebike(
            "Hero",
            json!({ "scores": { "motor": 90 }, "motor": { "power": 500, "brand": "Bosch" } }),
        );
        let result = analyze(&settings, &product, &cohort);
        let item = find(&result.advantages, "scores.motor").expect("score advantage");
        assert_eq!(item.text, "Excellent motor system");
        assert_eq!(item.tooltip.as_deref(), Some("500 W Bosch motor"));

        // diff = +6: under the gate.
        let product = ebike("Meh", json!({ "scores": { "motor": 78 } }));
        let result = analyze(&settings, &product, &cohort);
        assert!(find(&result.advantages, "scores.motor").is_none());

        // diff = -20: bottom tier weakness.
        let product = ebike("Slug", json!({ "scores": { "motor": 52 } }));
        let result = analyze(&settings, &product, &cohort);
        let item = find(&result.weaknesses, "scores.motor").expect("score weakness");
        assert_eq!(item.text, "Far below average motor system");
    }

    #[test]
    fn water_resistance_absolute_bands() {
        let settings = ComparisonSettings::default();
        let cohort = torque_cohort(&[60.0, 70.0, 75.0]);

        let sealed = ebike("Sealed", json!({ "water_resistance": "IPX5" }));
        let result = analyze(&settings, &sealed, &cohort);
        let item = find(&result.advantages, "water_resistance").expect("IPX5 advantage");
        assert_eq!(item.text, "Strong water resistance (IPX5)");

        let splash = ebike("Splash", json!({ "water_resistance": "IPX4" }));
        let result = analyze(&settings, &splash, &cohort);
        assert!(find(&result.advantages, "water_resistance").is_none());
        assert!(find(&result.weaknesses, "water_resistance").is_none());

        let open = ebike("Open", json!({ "water_resistance": "IPX2" }));
        let result = analyze(&settings, &open, &cohort);
        let item = find(&result.weaknesses, "water_resistance").expect("IPX2 weakness");
        assert_eq!(item.text, "Limited water resistance (IPX2)");

        let unrated = ebike("Unrated", json!({}));
        let result = analyze(&settings, &unrated, &cohort);
        let item = find(&result.weaknesses, "water_resistance").expect("missing rating weakness");
        assert_eq!(item.text, "No water resistance rating");
        assert_eq!(item.comparison, "unrated");
    }

    #[test]
    fn absolute_bands_ignore_cohort() {
        let settings = ComparisonSettings::default();
        // Every peer has even more gears, but 12 is excellent on the
        // fixed bands regardless.
        let product = ebike("Geared", json!({ "gears": 12 }));
        let cohort: Vec<ProductRecord> = [14.0, 14.0, 14.0]
            .iter()
            .enumerate()
            .map(|(i, v)| ebike(&format!("Peer {}", i), json!({ "gears": v })))
            .collect();

        let result = analyze(&settings, &product, &cohort);
        let item = find(&result.advantages, "gears").expect("gears advantage");
        assert_eq!(item.text, "Excellent gearing (12)");

        let single = ebike("Single", json!({ "gears": 1 }));
        let result = analyze(&settings, &single, &cohort);
        let item = find(&result.weaknesses, "gears").expect("single speed weakness");
        assert_eq!(item.text, "Limited gearing (1)");
    }

    #[test]
    fn derived_ratio_is_cohort_relative() {
        let settings = ComparisonSettings::default();
        let product = ebike(
            "Dense",
            json!({ "battery": { "capacity": 1000 }, "weight": 50 }),
        );
        let cohort: Vec<ProductRecord> = [(500.0, 50.0), (550.0, 55.0), (600.0, 60.0)]
            .iter()
            .enumerate()
            .map(|(i, (cap, w))| {
                ebike(
                    &format!("Peer {}", i),
                    json!({ "battery": { "capacity": cap }, "weight": w }),
                )
            })
            .collect();

        let result = analyze(&settings, &product, &cohort);
        let item = find(&result.advantages, "wh_per_lb").expect("wh/lb advantage");
        assert_eq!(item.product_value, 20.0);
        assert_eq!(item.percentile, Percentile::HUNDRED);
    }

    #[test]
    fn advantages_sorted_by_descending_percentile() {
        let settings = ComparisonSettings::default();
        let product = ebike(
            "Hero",
            json!({
                "motor": { "torque": 95 },
                "top_speed": 26,
                "weight": 45,
            }),
        );
        let cohort: Vec<ProductRecord> = [
            (60.0, 25.0, 50.0),
            (70.0, 24.0, 55.0),
            (75.0, 22.0, 60.0),
            (80.0, 20.0, 65.0),
        ]
        .iter()
        .enumerate()
        .map(|(i, (t, s, w))| {
            ebike(
                &format!("Peer {}", i),
                json!({ "motor": { "torque": t }, "top_speed": s, "weight": w }),
            )
        })
        .collect();

        let result = analyze(&settings, &product, &cohort);
        assert!(result.advantages.len() >= 2);
        for pair in result.advantages.windows(2) {
            assert!(pair[0].percentile.value() >= pair[1].percentile.value());
        }
    }

    #[test]
    fn cohort_average_scores_cover_the_whole_set() {
        let settings = ComparisonSettings::default();
        let product = ebike("Hero", json!({ "scores": { "motor": 90 } }));
        let cohort: Vec<ProductRecord> = [70.0, 80.0]
            .iter()
            .enumerate()
            .map(|(i, v)| ebike(&format!("Peer {}", i), json!({ "scores": { "motor": v } })))
            .collect();

        let result = analyze(&settings, &product, &cohort);
        assert_eq!(result.cohort_avg_scores.get("motor"), Some(&80.0));
        assert_eq!(result.products_in_set, 3);
    }

    #[test]
    fn analysis_is_idempotent() {
        let settings = ComparisonSettings::default();
        let product = ebike("Hero", json!({ "motor": { "torque": 95 }, "weight": 45 }));
        let cohort = torque_cohort(&[60.0, 70.0, 75.0, 80.0]);

        let first = analyze(&settings, &product, &cohort);
        let second = analyze(&settings, &product, &cohort);
        assert_eq!(first, second);
    }
}
