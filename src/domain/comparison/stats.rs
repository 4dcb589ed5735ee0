//! Cohort statistics: mean, percentile, rank, variance gates.
//!
//! Percentile and rank are orientation-aware: a higher percentile is
//! always better, regardless of whether the underlying spec prefers
//! high or low values.

use crate::domain::foundation::{approx_eq, CohortRank, Percentile, EPSILON};

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// True if the values actually vary (min != max beyond epsilon).
///
/// A flat cohort distinguishes nothing; comparing against it fabricates
/// verdicts out of rounding noise.
pub fn has_variance(values: &[f64]) -> bool {
    match (
        values.iter().cloned().reduce(f64::min),
        values.iter().cloned().reduce(f64::max),
    ) {
        (Some(min), Some(max)) => (max - min).abs() > EPSILON,
        _ => false,
    }
}

/// True if `a` beats `b` under the given orientation.
fn beats(a: f64, b: f64, higher_better: bool) -> bool {
    if approx_eq(a, b) {
        return false;
    }
    if higher_better {
        a > b
    } else {
        a < b
    }
}

/// Percentile of `value` among the other cohort values: the share of
/// `others` it strictly beats. Empty `others` pins to 0.
pub fn percentile_among(value: f64, others: &[f64], higher_better: bool) -> Percentile {
    if others.is_empty() {
        return Percentile::ZERO;
    }
    let beaten = others
        .iter()
        .filter(|o| beats(value, **o, higher_better))
        .count();
    Percentile::new(beaten as f64 / others.len() as f64 * 100.0)
}

/// 1-based rank of `value` in a cohort of `others.len() + 1` products.
/// Rank 1 means nothing beats it.
pub fn rank_among(value: f64, others: &[f64], higher_better: bool) -> CohortRank {
    let better = others
        .iter()
        .filter(|o| beats(**o, value, higher_better))
        .count();
    CohortRank::new(better + 1, others.len() + 1)
}

/// True if `value` is the outright best of the cohort (no other value
/// beats it).
pub fn is_cohort_best(value: f64, others: &[f64], higher_better: bool) -> bool {
    !others.iter().any(|o| beats(*o, value, higher_better))
}

/// True if `value` is the outright worst of the cohort.
pub fn is_cohort_worst(value: f64, others: &[f64], higher_better: bool) -> bool {
    !others.iter().any(|o| beats(value, *o, higher_better))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn mean_of_values() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), Some(4.0));
    }

    #[test]
    fn flat_cohort_has_no_variance() {
        assert!(!has_variance(&[5.0, 5.0, 5.0]));
        assert!(!has_variance(&[5.0, 5.0005, 5.0]));
        assert!(has_variance(&[5.0, 5.5]));
        assert!(!has_variance(&[]));
    }

    #[test]
    fn percentile_counts_strictly_beaten_share() {
        // value 8 beats 2 of 4 others
        let p = percentile_among(8.0, &[10.0, 9.0, 7.0, 5.0], true);
        assert_eq!(p.value(), 50.0);
    }

    #[test]
    fn percentile_flips_for_lower_better() {
        // weight 50 beats the two heavier products
        let p = percentile_among(50.0, &[45.0, 60.0, 70.0], false);
        assert!((p.value() - 66.6).abs() < 1.0);
    }

    #[test]
    fn percentile_ignores_ties() {
        let p = percentile_among(5.0, &[5.0, 5.0], true);
        assert_eq!(p.value(), 0.0);
    }

    #[test]
    fn rank_one_means_unbeaten() {
        let r = rank_among(90.0, &[80.0, 85.0, 70.0], true);
        assert_eq!(r.position, 1);
        assert_eq!(r.of, 4);
        assert!(r.is_best());
    }

    #[test]
    fn rank_counts_strictly_better_values() {
        let r = rank_among(80.0, &[90.0, 85.0, 70.0], true);
        assert_eq!(r.position, 3);
    }

    #[test]
    fn best_and_worst_detection() {
        assert!(is_cohort_best(90.0, &[80.0, 85.0], true));
        assert!(is_cohort_best(90.0, &[90.0, 85.0], true)); // tied best still best
        assert!(!is_cohort_best(80.0, &[90.0], true));
        assert!(is_cohort_worst(42.0, &[50.0, 60.0], true));
        assert!(is_cohort_best(42.0, &[50.0, 60.0], false));
    }
}
