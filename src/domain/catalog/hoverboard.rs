//! Hoverboard spec catalog.

use crate::domain::foundation::ProductType;
use crate::domain::spec::{ProductRecord, SpecValue, ValueResolver};

use super::definition::{
    BestTypeScorer, CategoryScoreSpec, CompositeSpec, DescriptiveClassifier, SpecDefinition,
    SpecKind,
};
use super::rankings::table_names;
use super::SpecCatalog;

pub(super) fn catalog() -> SpecCatalog {
    SpecCatalog {
        product_type: ProductType::Hoverboard,
        comparison_specs: comparison_specs(),
        composites: composites(),
        analysis_specs: analysis_specs(),
        score_categories: score_categories(),
        weakness_override,
    }
}

fn comparison_specs() -> Vec<SpecDefinition> {
    vec![
        SpecDefinition::numeric("motor.power", "motor power", true, "more motor power").unit("W"),
        SpecDefinition::numeric("top_speed", "top speed", true, "faster top speed").unit("mph"),
        SpecDefinition::numeric("range.tested", "range", true, "longer range")
            .unit("mi")
            .fallback("range.manufacturer"),
        SpecDefinition::numeric("weight", "weight", false, "lighter").unit("lbs"),
        SpecDefinition::numeric("max_load", "weight capacity", true, "higher weight capacity")
            .unit("lbs"),
        SpecDefinition::numeric("wheel.size", "wheel size", true, "larger wheels").unit("in"),
        SpecDefinition::ranked("wheel.material", "wheels", table_names::WHEEL_MATERIALS),
        SpecDefinition::numeric("charge_time", "charge time", false, "faster charging").unit("h"),
        SpecDefinition::with_kind(
            "ip_rating",
            "water resistance",
            true,
            SpecKind::BestType {
                scorer: BestTypeScorer::IpRating,
            },
        ),
        SpecDefinition::boolean("app_connectivity", "companion app"),
        SpecDefinition::boolean("led_lights", "LED lighting"),
        SpecDefinition::with_kind(
            "features",
            "extra features",
            true,
            SpecKind::FeatureCount {
                min_notable: 3,
                min_diff: 2,
            },
        ),
    ]
}

fn composites() -> Vec<CompositeSpec> {
    vec![CompositeSpec {
        category: "ride_quality",
        label: "ride quality",
        children: &["wheel.size", "wheel.material"],
        closeness: None,
    }]
}

fn analysis_specs() -> Vec<SpecDefinition> {
    vec![
        SpecDefinition::with_kind(
            "scores.ride_quality",
            "ride quality",
            true,
            SpecKind::ScoreBased {
                category: "ride_quality",
            },
        ),
        SpecDefinition::with_kind(
            "scores.build_quality",
            "build quality",
            true,
            SpecKind::ScoreBased {
                category: "build_quality",
            },
        ),
        SpecDefinition::with_kind(
            "scores.battery",
            "battery",
            true,
            SpecKind::ScoreBased { category: "battery" },
        ),
        SpecDefinition::numeric("motor.power", "motor power", true, "more motor power").unit("W"),
        SpecDefinition::numeric("top_speed", "top speed", true, "faster top speed").unit("mph"),
        SpecDefinition::numeric("range.tested", "range", true, "longer range")
            .unit("mi")
            .fallback("range.manufacturer"),
        SpecDefinition::numeric("weight", "weight", false, "lighter").unit("lbs"),
        SpecDefinition::numeric("charge_time", "charge time", false, "faster charging").unit("h"),
        SpecDefinition::with_kind(
            "max_load",
            "weight capacity",
            true,
            SpecKind::AbsoluteBands {
                advantage_at: 220.0,
                weakness_at: 165.0,
            },
        )
        .unit("lbs"),
        SpecDefinition::with_kind(
            "wheel.size",
            "wheel size",
            true,
            SpecKind::AbsoluteBands {
                advantage_at: 8.5,
                weakness_at: 6.5,
            },
        )
        .unit("in"),
        SpecDefinition::with_kind(
            "ip_rating",
            "water resistance",
            true,
            SpecKind::Descriptive {
                classifier: DescriptiveClassifier::WaterResistance,
            },
        ),
    ]
}

fn score_categories() -> Vec<CategoryScoreSpec> {
    vec![
        CategoryScoreSpec {
            category: "ride_quality",
            award_label: "Best ride quality",
            label: "ride quality",
            detail: ride_quality_detail,
        },
        CategoryScoreSpec {
            category: "build_quality",
            award_label: "Best build quality",
            label: "build quality",
            detail: build_quality_detail,
        },
        CategoryScoreSpec {
            category: "battery",
            award_label: "Best battery",
            label: "battery",
            detail: battery_detail,
        },
    ]
}

fn weakness_override(_spec_key: &str, _value: f64) -> bool {
    false
}

fn ride_quality_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let size = resolver.resolve_number(record, "wheel.size")?;
    let mut detail = format!("{:.1}\" wheels", size);
    if let Some(material) = resolver
        .resolve(record, "wheel.material")
        .and_then(SpecValue::as_str)
    {
        detail.push_str(&format!(" ({})", material.to_lowercase()));
    }
    Some(detail)
}

fn build_quality_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(ip) = resolver.resolve(record, "ip_rating").and_then(SpecValue::as_str) {
        parts.push(format!("{} rated", ip.to_uppercase()));
    }
    if let Some(load) = resolver.resolve_number(record, "max_load") {
        parts.push(format!("{:.0} lbs max load", load));
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(", "))
}

fn battery_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(range) = resolver.resolve_number(record, "range.tested") {
        parts.push(format!("{:.0} mi tested range", range));
    }
    if let Some(charge) = resolver.resolve_number(record, "charge_time") {
        parts.push(format!("{:.1} h charge time", charge));
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ride_quality_detail_includes_material() {
        let record = ProductRecord::new(
            "Test",
            SpecValue::from_json(json!({
                "wheel": { "size": 8.5, "material": "Aluminum Alloy" },
            })),
        );
        let resolver = ValueResolver::new(ProductType::Hoverboard);
        assert_eq!(
            ride_quality_detail(&record, &resolver).unwrap(),
            "8.5\" wheels (aluminum alloy)"
        );
    }

    #[test]
    fn charge_time_is_lower_better() {
        let catalog = catalog();
        let charge = catalog.comparison_spec("charge_time").unwrap();
        assert!(!charge.higher_better);
    }
}
