//! Electric bike spec catalog.

use crate::domain::foundation::ProductType;
use crate::domain::spec::{ProductRecord, SpecValue, ValueResolver};

use super::definition::{
    CategoryScoreSpec, CompositeSpec, DescriptiveClassifier, SpecDefinition, SpecKind,
};
use super::rankings::table_names;
use super::SpecCatalog;

/// EU/UK street-legal pedal-assist motors are capped at 250 W; US class
/// limits sit near 350 W for several states. A motor inside this band
/// reflects regulation, not a design shortfall.
const REGULATED_POWER_MIN: f64 = 250.0;
const REGULATED_POWER_MAX: f64 = 350.0;

pub(super) fn catalog() -> SpecCatalog {
    SpecCatalog {
        product_type: ProductType::EBike,
        comparison_specs: comparison_specs(),
        composites: composites(),
        analysis_specs: analysis_specs(),
        score_categories: score_categories(),
        weakness_override,
    }
}

fn comparison_specs() -> Vec<SpecDefinition> {
    vec![
        SpecDefinition::numeric("motor.torque", "torque", true, "more torque").unit("Nm"),
        SpecDefinition::numeric("motor.power", "motor power", true, "more motor power").unit("W"),
        SpecDefinition::numeric("battery.capacity", "battery capacity", true, "more battery capacity")
            .unit("Wh"),
        SpecDefinition::numeric("range.tested", "range", true, "longer range")
            .unit("mi")
            .fallback("range.manufacturer")
            .tooltip("Tested range where available, otherwise manufacturer claim"),
        SpecDefinition::numeric("top_speed", "top speed", true, "faster top speed").unit("mph"),
        SpecDefinition::numeric("weight", "weight", false, "lighter").unit("lbs"),
        SpecDefinition::numeric("max_load", "weight capacity", true, "higher weight capacity")
            .unit("lbs"),
        SpecDefinition::ranked("motor.brand", "motor brand", table_names::MOTOR_BRANDS),
        SpecDefinition::ranked("drivetrain.groupset", "drivetrain", table_names::DRIVETRAIN_TIERS),
        SpecDefinition::ranked("brakes.type", "brakes", table_names::BRAKE_TYPES),
        SpecDefinition::numeric("gears", "gearing", true, "more gears").min_diff(2.0),
        SpecDefinition::numeric(
            "suspension.travel",
            "suspension travel",
            true,
            "more suspension travel",
        )
        .unit("mm"),
        SpecDefinition::numeric("tires.width", "tire width", true, "wider tires").unit("in"),
        SpecDefinition::boolean("battery.removable", "removable battery"),
        SpecDefinition::boolean("lights.integrated", "integrated lights"),
        SpecDefinition::boolean("rack.included", "included rear rack"),
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
            category: "motor",
            label: "motor system",
            children: &["motor.torque", "motor.power", "motor.brand"],
            closeness: None,
        },
        CompositeSpec {
            category: "ride_quality",
            label: "ride quality",
            children: &["suspension.travel", "tires.width", "weight"],
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
            "scores.battery",
            "battery",
            true,
            SpecKind::ScoreBased { category: "battery" },
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
            "scores.maintenance",
            "ease of maintenance",
            true,
            SpecKind::ScoreBased {
                category: "maintenance",
            },
        ),
        SpecDefinition::numeric("motor.power", "motor power", true, "more motor power").unit("W"),
        SpecDefinition::numeric("motor.torque", "torque", true, "more torque").unit("Nm"),
        SpecDefinition::numeric("battery.capacity", "battery capacity", true, "more battery capacity")
            .unit("Wh"),
        SpecDefinition::numeric("range.tested", "range", true, "longer range")
            .unit("mi")
            .fallback("range.manufacturer"),
        SpecDefinition::numeric("top_speed", "top speed", true, "faster top speed").unit("mph"),
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
        SpecDefinition::with_kind(
            "watts_per_lb",
            "power to weight",
            true,
            SpecKind::Derived {
                numerator: "motor.power",
                denominator: "weight",
            },
        )
        .unit("W/lb"),
        SpecDefinition::numeric(
            "value_metrics.wh_per_dollar",
            "battery capacity per dollar",
            true,
            "better value",
        )
        .unit("Wh/$"),
        SpecDefinition::with_kind(
            "gears",
            "gearing",
            true,
            SpecKind::AbsoluteBands {
                advantage_at: 10.0,
                weakness_at: 1.0,
            },
        )
        .tooltip("Single-speed drivetrains limit hill climbing"),
        SpecDefinition::with_kind(
            "brakes.rotor_size",
            "brake rotors",
            true,
            SpecKind::AbsoluteBands {
                advantage_at: 180.0,
                weakness_at: 140.0,
            },
        )
        .unit("mm"),
        SpecDefinition::with_kind(
            "max_load",
            "weight capacity",
            true,
            SpecKind::AbsoluteBands {
                advantage_at: 300.0,
                weakness_at: 220.0,
            },
        )
        .unit("lbs"),
        SpecDefinition::with_kind(
            "suspension.travel",
            "suspension travel",
            true,
            SpecKind::AbsoluteBands {
                advantage_at: 120.0,
                weakness_at: 40.0,
            },
        )
        .unit("mm"),
        SpecDefinition::with_kind(
            "water_resistance",
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
            category: "battery",
            award_label: "Best battery",
            label: "battery",
            detail: battery_detail,
        },
        CategoryScoreSpec {
            category: "ride_quality",
            award_label: "Best ride quality",
            label: "ride quality",
            detail: ride_quality_detail,
        },
        CategoryScoreSpec {
            category: "maintenance",
            award_label: "Lowest maintenance",
            label: "ease of maintenance",
            detail: maintenance_detail,
        },
    ]
}

fn weakness_override(spec_key: &str, value: f64) -> bool {
    // Regulatory ceiling, not a shortfall: never flag a street-legal
    // wattage as weak on raw power or power-to-weight.
    matches!(spec_key, "motor.power" | "watts_per_lb")
        && (REGULATED_POWER_MIN..=REGULATED_POWER_MAX).contains(&value)
}

fn motor_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(brand) = resolver.resolve(record, "motor.brand").and_then(SpecValue::as_str) {
        if let Some(power) = resolver.resolve_number(record, "motor.power") {
            parts.push(format!("{:.0} W {} motor", power, brand));
        } else {
            parts.push(format!("{} motor", brand));
        }
    } else if let Some(power) = resolver.resolve_number(record, "motor.power") {
        parts.push(format!("{:.0} W motor", power));
    }
    if let Some(torque) = resolver.resolve_number(record, "motor.torque") {
        parts.push(format!("{:.0} Nm of torque", torque));
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
        .resolve(record, "battery.removable")
        .map(SpecValue::as_bool_loose)
        .unwrap_or(false)
    {
        detail.push_str(", removable");
    }
    if let Some(range) = resolver.resolve_number(record, "range.tested") {
        detail.push_str(&format!(", {:.0} mi tested range", range));
    }
    Some(detail)
}

fn ride_quality_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(travel) = resolver.resolve_number(record, "suspension.travel") {
        parts.push(format!("{:.0} mm suspension travel", travel));
    }
    if let Some(width) = resolver.resolve_number(record, "tires.width") {
        parts.push(format!("{:.1}\" tires", width));
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(", "))
}

fn maintenance_detail(record: &ProductRecord, resolver: &ValueResolver) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(drivetrain) = resolver
        .resolve(record, "drivetrain.groupset")
        .and_then(SpecValue::as_str)
    {
        parts.push(format!("{} drivetrain", drivetrain));
    }
    if resolver
        .resolve(record, "drivetrain.belt")
        .map(SpecValue::as_bool_loose)
        .unwrap_or(false)
    {
        parts.push("belt drive".to_string());
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

    fn resolver() -> ValueResolver {
        ValueResolver::new(ProductType::EBike)
    }

    #[test]
    fn regulated_wattage_suppresses_power_weakness() {
        assert!(weakness_override("motor.power", 250.0));
        assert!(weakness_override("motor.power", 350.0));
        assert!(weakness_override("watts_per_lb", 300.0));
        assert!(!weakness_override("motor.power", 200.0));
        assert!(!weakness_override("motor.power", 500.0));
        assert!(!weakness_override("motor.torque", 250.0));
    }

    #[test]
    fn motor_detail_prefers_brand_and_power() {
        let record = ProductRecord::new(
            "Test",
            SpecValue::from_json(json!({
                "motor": { "brand": "Bosch", "power": 250, "torque": 85 },
            })),
        );
        let detail = motor_detail(&record, &resolver()).unwrap();
        assert_eq!(detail, "250 W Bosch motor, 85 Nm of torque");
    }

    #[test]
    fn motor_detail_without_specs_is_none() {
        let record = ProductRecord::new("Test", SpecValue::empty_map());
        assert!(motor_detail(&record, &resolver()).is_none());
    }

    #[test]
    fn battery_detail_mentions_removability() {
        let record = ProductRecord::new(
            "Test",
            SpecValue::from_json(json!({
                "battery": { "capacity": 625, "removable": true },
            })),
        );
        let detail = battery_detail(&record, &resolver()).unwrap();
        assert_eq!(detail, "625 Wh battery, removable");
    }

    #[test]
    fn catalog_lists_range_fallback() {
        let catalog = catalog();
        let range = catalog.comparison_spec("range.tested").unwrap();
        assert_eq!(range.fallback_key, Some("range.manufacturer"));
    }
}
