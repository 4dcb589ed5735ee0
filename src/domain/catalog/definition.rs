//! Spec definitions: the declarative unit driving every comparator.
//!
//! Each product type's catalog is a priority-ordered list of
//! [`SpecDefinition`]s. The [`SpecKind`] tagged union replaces the
//! optional-field soup a dynamic config would need; comparators
//! dispatch on it with plain pattern matching, so a typo in a catalog
//! is a compile error rather than a silently ignored key.

use crate::domain::spec::{ProductRecord, ValueResolver};

/// Categorical scorer used for "best type" specs in multi mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestTypeScorer {
    /// Dual > single > none, weighted by mechanism quality.
    Suspension,
    /// IP water digit primary, dust digit as tiebreak.
    IpRating,
}

/// Absolute quality classifier for descriptive specs in cohort mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptiveClassifier {
    /// Water digit >= 5 advantage, missing or <= 3 weakness, 4 neutral.
    WaterResistance,
}

/// How a spec's values are compared.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecKind {
    /// Plain numeric comparison gated by an absolute and/or relative
    /// significance threshold. `comparative` is the winning-side tail
    /// phrase ("more torque", "lighter", "longer range").
    Numeric {
        min_diff: Option<f64>,
        pct_threshold: Option<f64>,
        comparative: &'static str,
    },
    /// Categorical value ranked through a [`super::RankingTable`].
    Ranked { table: &'static str },
    /// Present/absent feature flag.
    Boolean,
    /// Count of listed features; notable only above a floor.
    FeatureCount { min_notable: u32, min_diff: u32 },
    /// Number of drive motors (1 vs 2).
    MotorCount,
    /// Categorical "best type" selection via a domain scorer.
    BestType { scorer: BestTypeScorer },
    /// Composite category score compared against the cohort average.
    ScoreBased { category: &'static str },
    /// Classified by fixed bands, independent of the cohort.
    AbsoluteBands { advantage_at: f64, weakness_at: f64 },
    /// Banded like `AbsoluteBands` but from a parsed code, not a number.
    Descriptive { classifier: DescriptiveClassifier },
    /// On-the-fly ratio of two resolved specs (e.g. Wh per lb).
    Derived {
        numerator: &'static str,
        denominator: &'static str,
    },
}

/// One comparable specification.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Option<&'static str>,
    pub higher_better: bool,
    pub kind: SpecKind,
    /// Manufacturer-claim key tried when the tested value is absent.
    pub fallback_key: Option<&'static str>,
    /// Skip the spec in multi mode unless every product has a value.
    pub require_all: bool,
    pub tooltip: Option<&'static str>,
}

impl SpecDefinition {
    /// Numeric spec with the default relative threshold.
    pub fn numeric(
        key: &'static str,
        label: &'static str,
        higher_better: bool,
        comparative: &'static str,
    ) -> Self {
        Self {
            key,
            label,
            unit: None,
            higher_better,
            kind: SpecKind::Numeric {
                min_diff: None,
                pct_threshold: None,
                comparative,
            },
            fallback_key: None,
            require_all: false,
            tooltip: None,
        }
    }

    /// Ranked categorical spec.
    pub fn ranked(key: &'static str, label: &'static str, table: &'static str) -> Self {
        Self {
            key,
            label,
            unit: None,
            higher_better: true,
            kind: SpecKind::Ranked { table },
            fallback_key: None,
            require_all: false,
            tooltip: None,
        }
    }

    /// Boolean feature spec.
    pub fn boolean(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            unit: None,
            higher_better: true,
            kind: SpecKind::Boolean,
            fallback_key: None,
            require_all: false,
            tooltip: None,
        }
    }

    /// Spec with an explicit kind (counters, scorers, bands, derived).
    pub fn with_kind(
        key: &'static str,
        label: &'static str,
        higher_better: bool,
        kind: SpecKind,
    ) -> Self {
        Self {
            key,
            label,
            unit: None,
            higher_better,
            kind,
            fallback_key: None,
            require_all: false,
            tooltip: None,
        }
    }

    /// Sets the display unit.
    pub fn unit(mut self, unit: &'static str) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Sets the absolute minimum difference gate (numeric kinds).
    pub fn min_diff(mut self, value: f64) -> Self {
        if let SpecKind::Numeric { min_diff, .. } = &mut self.kind {
            *min_diff = Some(value);
        }
        self
    }

    /// Sets the relative percentage gate (numeric kinds).
    pub fn pct_threshold(mut self, value: f64) -> Self {
        if let SpecKind::Numeric { pct_threshold, .. } = &mut self.kind {
            *pct_threshold = Some(value);
        }
        self
    }

    /// Sets the manufacturer-claim fallback key.
    pub fn fallback(mut self, key: &'static str) -> Self {
        self.fallback_key = Some(key);
        self
    }

    /// Requires every product to carry a value (multi mode).
    pub fn require_all(mut self) -> Self {
        self.require_all = true;
        self
    }

    /// Sets the tooltip shown alongside the advantage.
    pub fn tooltip(mut self, text: &'static str) -> Self {
        self.tooltip = Some(text);
        self
    }
}

/// A composite category grouping child specs under one 0-100 score.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeSpec {
    /// Key under `specs.scores`.
    pub category: &'static str,
    /// Display label ("ride quality").
    pub label: &'static str,
    /// Child spec keys consumed by a decisive composite verdict.
    pub children: &'static [&'static str],
    /// Override for the engine-wide closeness threshold.
    pub closeness: Option<f64>,
}

/// Builds a short descriptive string from a winner's raw specs, so two
/// category awards never share mechanically identical phrasing.
pub type DetailBuilder = fn(&ProductRecord, &ValueResolver) -> Option<String>;

/// A scored category awarded in multi mode ("Best motor system").
#[derive(Clone)]
pub struct CategoryScoreSpec {
    /// Key under `specs.scores`.
    pub category: &'static str,
    /// Award phrasing ("Best motor system", "Lowest maintenance").
    pub award_label: &'static str,
    /// Display label used in cohort analysis items.
    pub label: &'static str,
    pub detail: DetailBuilder,
}

impl std::fmt::Debug for CategoryScoreSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryScoreSpec")
            .field("category", &self.category)
            .field("award_label", &self.award_label)
            .field("label", &self.label)
            .finish()
    }
}
