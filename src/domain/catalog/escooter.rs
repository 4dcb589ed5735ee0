//! Electric scooter spec catalog.

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
        product_type: ProductType::EScooter,
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
        SpecDefinition::with_kind("motor.count", "motors", true, SpecKind::MotorCount),
        SpecDefinition::numeric("top_speed", "top speed", true, "faster top speed")
            .unit("mph")
            .fallback("top_speed_manufacturer"),
        SpecDefinition::numeric("range.tested", "range", true, "longer range")
            .unit("mi")
            .fallback("range.manufacturer")
            .tooltip("Tested range where available, otherwise manufacturer claim"),
        SpecDefinition::numeric("battery.capacity", "battery capacity", true, "more battery capacity")
            .unit("Wh"),
        SpecDefinition::numeric("weight", "weight", false, "lighter").unit("lbs"),
        SpecDefinition::numeric("max_load", "weight capacity", true, "higher weight capacity")
            .unit("lbs"),
        SpecDefinition::with_kind(
            "suspension",
            "suspension",
            true,
            SpecKind::BestType {
                scorer: BestTypeScorer::Suspension,
            },
        ),
        SpecDefinition::ranked("tires.type", "tires", table_names::TIRE_TYPES),
        SpecDefinition::numeric("tires.size", "tire size", true, "larger tires").unit("in"),
        SpecDefinition::with_kind(
            "ip_rating",
            "water resistance",
            true,
            SpecKind::BestType {
                scorer: BestTypeScorer::IpRating,
            },
        ),
        SpecDefinition::ranked("brakes.type", "brakes", table_names::BRAKE_TYPES),
        SpecDefinition::numeric("hill_grade", "hill climbing", true, "steeper hill climbing")
            .unit("%"),
        SpecDefinition::boolean("turn_signals", "turn signals"),
        SpecDefinition::boolean("cruise_control", "cruise control"),
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
    vec![
        CompositeSpec {
            category: "ride_quality",
            label: "ride quality",
            children: &["suspension", "tires.type", "tires.size"],
            closeness: None,
        },
        CompositeSpec {
            category: "portability",
            label: "portability",
            children: &["weight"],
            closeness: None,
        },
    ]
}

fn analysis_specs() -> Vec<SpecDefinition> {
    vec![
        SpecDefinition::with_kind(
            "scores.motor",
            "motor system",
            true,
            SpecKind::ScoreBased { category: "motor" },
        ),
        SpecDefinition::with_kind(
            "scores.ride_quality",
            "ride quality",
            true,
            SpecKind::ScoreBased {
                category: "ride_quality",
            },
        ),
        SpecDefinition::with_kind(
            "scores.portability",
            "portability",
            true,
            SpecKind::ScoreBased {
                category: "portability",
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
        SpecDefinition::numeric("motor.power", "motor power", true, "more motor power").unit("W"),
        SpecDefinition::numeric("top_speed", "top speed", true, "faster top speed")
            .unit("mph")
            .fallback("top_speed_manufacturer"),
        SpecDefinition::numeric("range.tested", "range", true, "longer range")
            .unit("mi")
            .fallback("range.manufacturer"),
        SpecDefinition::numeric("battery.capacity", "battery capacity", true, "more battery capacity")
            .unit("Wh"),
        SpecDefinition::numeric("weight", "weight", false, "lighter").unit("lbs"),
        SpecDefinition::with_kind(
            "wh_per_lb",
            "battery capacity per pound",
            true,
            SpecKind::Derived {
                numerator: "battery.capacity",
                denominator: "weight",
            },
        )
        .unit("Wh/lb"),
        SpecDefinition::numeric(
            "value_metrics.wh_per_dollar",
            "battery capacity per dollar",
            true,
            "better value",
        )
        .unit("Wh/$"),
        SpecDefinition::numeric(
            "value_metrics.range_per_dollar",
            "range per dollar",
            true,
            "better value",
        )
        .unit("mi/$"),
        SpecDefinition::with_kind(
            "max_load",
            "weight capacity",
            true,
            SpecKind::AbsoluteBands {
                advantage_at: 265.0,
                weakness_at: 220.0,
            },
        )
        .unit("lbs"),
        SpecDefinition::with_kind(
            "suspension.travel",
            "suspension travel",
            true,
            SpecKind::AbsoluteBands {
                advantage_at: 80.0,
                weakness_at: 20.0,
            },
        )
        .unit("mm"),
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
            category: "motor",
            award_label: "Best motor system",
            label: "motor system",
            detail: motor_detail,
        },
        CategoryScoreSpec {
            category: "ride_quality",
            award_label: "Best ride quality",
            label: "ride quality",
            detail: ride_quality_detail,
        },
        CategoryScoreSpec {
            category: "portability",
            award_label: "Most portable",
            label: "portability",
            detail: portability_detail,
        },
        CategoryScoreSpec {
            category: "build_quality",
            award_label: "Best build quality",
            label: "build quality",
            detail: build_quality_detail,
        },
    ]
}

fn weakness_override(_spec_key: &str, _value: f64) -> bool {
    false
}

fn motor_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let power = resolver.resolve_number(record, "motor.power")?;
    let count = resolver
        .resolve_number(record, "motor.count")
        .unwrap_or(1.0);
    let mut detail = if count >= 2.0 {
        format!("dual {:.0} W motors", power)
    } else {
        format!("{:.0} W motor", power)
    };
    if let Some(grade) = resolver.resolve_number(record, "hill_grade") {
        detail.push_str(&format!(", climbs {:.0}% grades", grade));
    }
    Some(detail)
}

fn ride_quality_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(suspension) = resolver.resolve(record, "suspension").and_then(SpecValue::as_str) {
        if !suspension.eq_ignore_ascii_case("none") {
            parts.push(format!("{} suspension", suspension));
        }
    }
    if let Some(size) = resolver.resolve_number(record, "tires.size") {
        if let Some(tire_type) = resolver.resolve(record, "tires.type").and_then(SpecValue::as_str) {
            parts.push(format!("{:.0}\" {} tires", size, tire_type.to_lowercase()));
        } else {
            parts.push(format!("{:.0}\" tires", size));
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(", "))
}

fn portability_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let weight = resolver.resolve_number(record, "weight")?;
    let mut detail = format!("{:.0} lbs", weight);
    if resolver
        .resolve(record, "folding")
        .map(SpecValue::as_bool_loose)
        .unwrap_or(false)
    {
        detail.push_str(", folds for transport");
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
