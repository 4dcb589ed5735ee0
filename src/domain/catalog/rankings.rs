//! Categorical ranking tables.
//!
//! Each table maps a normalized categorical value (motor brand,
//! drivetrain tier, brake type, ...) to a preference rank where 1 is
//! best. Values missing from a table rank one below the worst listed
//! entry, so an unknown brand loses to every known one instead of
//! failing the comparison.
//!
//! Tables are built once and shared read-only; comparators receive a
//! [`RankingSet`] by reference rather than reaching for globals.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// One ordered preference table.
#[derive(Debug, Clone)]
pub struct RankingTable {
    name: &'static str,
    entries: Vec<(&'static str, u32)>,
}

impl RankingTable {
    /// Builds a table from entries already ordered best-first.
    /// Ranks are assigned 1..=n in the given order.
    pub fn from_ordered(name: &'static str, ordered: &[&'static str]) -> Self {
        let entries = ordered
            .iter()
            .enumerate()
            .map(|(i, key)| (*key, (i + 1) as u32))
            .collect();
        Self { name, entries }
    }

    /// Builds a table with explicit ranks (ties allowed).
    pub fn from_ranked(name: &'static str, ranked: &[(&'static str, u32)]) -> Self {
        Self {
            name,
            entries: ranked.to_vec(),
        }
    }

    /// Returns the table name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rank reserved for values not present in the table.
    pub fn fallback_rank(&self) -> u32 {
        self.entries.iter().map(|(_, r)| *r).max().unwrap_or(0) + 1
    }

    /// Looks up the rank for a raw categorical value.
    ///
    /// Matching is case-insensitive. An exact normalized match wins;
    /// otherwise the first entry whose key appears inside the raw
    /// string matches, so "Bosch Performance Line CX" still ranks as
    /// "bosch". Unmatched values get [`Self::fallback_rank`].
    pub fn rank_of(&self, raw: &str) -> u32 {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return self.fallback_rank();
        }
        if let Some((_, rank)) = self.entries.iter().find(|(key, _)| *key == normalized) {
            return *rank;
        }
        if let Some((_, rank)) = self
            .entries
            .iter()
            .find(|(key, _)| normalized.contains(key))
        {
            return *rank;
        }
        self.fallback_rank()
    }

    /// True if the raw value matches a listed entry.
    pub fn contains(&self, raw: &str) -> bool {
        self.rank_of(raw) != self.fallback_rank()
    }
}

/// The full set of ranking tables, keyed by table name.
#[derive(Debug, Clone)]
pub struct RankingSet {
    tables: BTreeMap<&'static str, RankingTable>,
}

impl RankingSet {
    /// Builds a set from tables.
    pub fn new(tables: Vec<RankingTable>) -> Self {
        Self {
            tables: tables.into_iter().map(|t| (t.name, t)).collect(),
        }
    }

    /// Looks up a table by name.
    pub fn table(&self, name: &str) -> Option<&RankingTable> {
        self.tables.get(name)
    }
}

/// Table names referenced by spec definitions.
pub mod table_names {
    pub const MOTOR_BRANDS: &str = "motor_brands";
    pub const DRIVETRAIN_TIERS: &str = "drivetrain_tiers";
    pub const BRAKE_TYPES: &str = "brake_types";
    pub const TIRE_TYPES: &str = "tire_types";
    pub const WHEEL_MATERIALS: &str = "wheel_materials";
    pub const DECK_MATERIALS: &str = "deck_materials";
    pub const BATTERY_CELL_BRANDS: &str = "battery_cell_brands";
}

/// The shared, read-only ranking tables.
pub static RANKINGS: Lazy<RankingSet> = Lazy::new(|| {
    RankingSet::new(vec![
        // Mid-drive household names first, then the big hub-motor OEMs.
        RankingTable::from_ordered(
            table_names::MOTOR_BRANDS,
            &[
                "bosch", "brose", "shimano", "yamaha", "fazua", "mahle", "bafang", "ananda",
                "aikema", "hyena",
            ],
        ),
        RankingTable::from_ranked(
            table_names::DRIVETRAIN_TIERS,
            &[
                ("sram eagle", 1),
                ("shimano xt", 1),
                ("shimano deore", 2),
                ("sram nx", 2),
                ("shimano cues", 3),
                ("shimano alivio", 3),
                ("shimano acera", 4),
                ("shimano altus", 5),
                ("shimano tourney", 6),
                ("microshift", 6),
            ],
        ),
        RankingTable::from_ranked(
            table_names::BRAKE_TYPES,
            &[
                ("hydraulic disc", 1),
                ("mechanical disc", 2),
                ("drum", 3),
                ("rim", 4),
                ("regenerative", 4),
                ("foot", 5),
            ],
        ),
        RankingTable::from_ordered(
            table_names::TIRE_TYPES,
            &["pneumatic tubeless", "pneumatic", "honeycomb", "solid"],
        ),
        RankingTable::from_ordered(
            table_names::WHEEL_MATERIALS,
            &["magnesium alloy", "aluminum alloy", "steel", "plastic"],
        ),
        RankingTable::from_ranked(
            table_names::DECK_MATERIALS,
            &[
                ("carbon fiber", 1),
                ("fiberglass composite", 2),
                ("bamboo", 2),
                ("canadian maple", 3),
                ("maple", 3),
                ("plastic", 4),
            ],
        ),
        RankingTable::from_ordered(
            table_names::BATTERY_CELL_BRANDS,
            &["samsung", "lg", "panasonic", "sanyo", "eve", "generic"],
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ordered_assigns_sequential_ranks() {
        let t = RankingTable::from_ordered("test", &["a", "b", "c"]);
        assert_eq!(t.rank_of("a"), 1);
        assert_eq!(t.rank_of("b"), 2);
        assert_eq!(t.rank_of("c"), 3);
    }

    #[test]
    fn unmapped_value_gets_worst_plus_one() {
        let t = RankingTable::from_ordered("test", &["a", "b", "c"]);
        assert_eq!(t.rank_of("acme"), 4);
        assert_eq!(t.fallback_rank(), 4);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let brands = RANKINGS.table(table_names::MOTOR_BRANDS).unwrap();
        assert_eq!(brands.rank_of("Bosch"), 1);
        assert_eq!(brands.rank_of("BAFANG"), 7);
    }

    #[test]
    fn substring_match_handles_model_suffixes() {
        let brands = RANKINGS.table(table_names::MOTOR_BRANDS).unwrap();
        assert_eq!(brands.rank_of("Bosch Performance Line CX"), 1);
        assert_eq!(brands.rank_of("Shimano EP801"), 3);
    }

    #[test]
    fn explicit_ranks_allow_ties() {
        let tiers = RANKINGS.table(table_names::DRIVETRAIN_TIERS).unwrap();
        assert_eq!(tiers.rank_of("SRAM Eagle"), tiers.rank_of("Shimano XT"));
    }

    #[test]
    fn empty_value_falls_back_to_worst() {
        let t = RankingTable::from_ordered("test", &["a"]);
        assert_eq!(t.rank_of(""), 2);
        assert_eq!(t.rank_of("  "), 2);
    }

    #[test]
    fn set_resolves_known_tables() {
        for name in [
            table_names::MOTOR_BRANDS,
            table_names::DRIVETRAIN_TIERS,
            table_names::BRAKE_TYPES,
            table_names::TIRE_TYPES,
            table_names::WHEEL_MATERIALS,
            table_names::DECK_MATERIALS,
            table_names::BATTERY_CELL_BRANDS,
        ] {
            assert!(RANKINGS.table(name).is_some(), "missing table {}", name);
        }
        assert!(RANKINGS.table("nonexistent").is_none());
    }
}
