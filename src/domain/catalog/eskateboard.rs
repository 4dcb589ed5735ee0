//! Electric skateboard spec catalog.

use crate::domain::foundation::ProductType;
use crate::domain::spec::{ProductRecord, SpecValue, ValueResolver};

use super::definition::{CategoryScoreSpec, CompositeSpec, SpecDefinition, SpecKind};
use super::rankings::table_names;
use super::SpecCatalog;

pub(super) fn catalog() -> SpecCatalog {
    SpecCatalog {
        product_type: ProductType::ESkateboard,
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
        SpecDefinition::numeric("top_speed", "top speed", true, "faster top speed").unit("mph"),
        SpecDefinition::numeric("range.tested", "range", true, "longer range")
            .unit("mi")
            .fallback("range.manufacturer"),
        SpecDefinition::numeric("battery.capacity", "battery capacity", true, "more battery capacity")
            .unit("Wh"),
        SpecDefinition::numeric("weight", "weight", false, "lighter").unit("lbs"),
        SpecDefinition::numeric("max_load", "weight capacity", true, "higher weight capacity")
            .unit("lbs"),
        SpecDefinition::numeric("hill_grade", "hill climbing", true, "steeper hill climbing")
            .unit("%"),
        SpecDefinition::ranked("deck.material", "deck", table_names::DECK_MATERIALS),
        SpecDefinition::numeric("deck.length", "deck length", true, "longer deck").unit("in"),
        SpecDefinition::numeric("wheel.size", "wheel size", true, "larger wheels").unit("mm"),
        SpecDefinition::boolean("regenerative_braking", "regenerative braking"),
        SpecDefinition::boolean("swappable_battery", "swappable battery"),
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
        children: &["deck.material", "deck.length", "wheel.size"],
        closeness: None,
    }]
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
            "value_metrics.range_per_dollar",
            "range per dollar",
            true,
            "better value",
        )
        .unit("mi/$"),
        SpecDefinition::with_kind(
            "hill_grade",
            "hill climbing",
            true,
            SpecKind::AbsoluteBands {
                advantage_at: 30.0,
                weakness_at: 15.0,
            },
        )
        .unit("%"),
        SpecDefinition::with_kind(
            "max_load",
            "weight capacity",
            true,
            SpecKind::AbsoluteBands {
                advantage_at: 285.0,
                weakness_at: 200.0,
            },
        )
        .unit("lbs"),
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

fn motor_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let power = resolver.resolve_number(record, "motor.power")?;
    let count = resolver.resolve_number(record, "motor.count").unwrap_or(1.0);
    let mut detail = if count >= 2.0 {
        format!("dual {:.0} W hub motors", power)
    } else {
        format!("{:.0} W hub motor", power)
    };
    if let Some(grade) = resolver.resolve_number(record, "hill_grade") {
        detail.push_str(&format!(", climbs {:.0}% grades", grade));
    }
    Some(detail)
}

fn ride_quality_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(material) = resolver
        .resolve(record, "deck.material")
        .and_then(SpecValue::as_str)
    {
        parts.push(format!("{} deck", material.to_lowercase()));
    }
    if let Some(size) = resolver.resolve_number(record, "wheel.size") {
        parts.push(format!("{:.0} mm wheels", size));
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(", "))
}

fn battery_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let capacity = resolver.resolve_number(record, "battery.capacity")?;
    let mut detail = format!("{:.0} Wh battery", capacity);
    if resolver
        .resolve(record, "swappable_battery")
        .map(SpecValue::as_bool_loose)
        .unwrap_or(false)
    {
        detail.push_str(", swappable");
    }
    Some(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn motor_detail_reports_dual_hub_motors() {
        let record = ProductRecord::new(
            "Test",
            SpecValue::from_json(json!({
                "motor": { "power": 3000, "count": 2 },
                "hill_grade": 30,
            })),
        );
        let resolver = ValueResolver::new(ProductType::ESkateboard);
        assert_eq!(
            motor_detail(&record, &resolver).unwrap(),
            "dual 3000 W hub motors, climbs 30% grades"
        );
    }

    #[test]
    fn deck_material_uses_deck_materials_table() {
        let catalog = catalog();
        let deck = catalog.comparison_spec("deck.material").unwrap();
        assert_eq!(
            deck.kind,
            SpecKind::Ranked {
                table: table_names::DECK_MATERIALS
            }
        );
    }
}
