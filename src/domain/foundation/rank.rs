//! Cohort rank value object (1-based, 1 = best).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product's position within a cohort: rank 1 is the best value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CohortRank {
    /// 1-based position.
    pub position: usize,
    /// Number of comparable products in the cohort.
    pub of: usize,
}

impl CohortRank {
    /// Creates a rank, clamping position into `1..=of`.
    pub fn new(position: usize, of: usize) -> Self {
        let of = of.max(1);
        Self {
            position: position.clamp(1, of),
            of,
        }
    }

    /// True if this is the best position in the cohort.
    pub fn is_best(&self) -> bool {
        self.position == 1
    }

    /// True if this is the worst position in the cohort.
    pub fn is_worst(&self) -> bool {
        self.position == self.of
    }
}

impl fmt::Display for CohortRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} of {}", self.position, self.of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_position_into_cohort() {
        assert_eq!(CohortRank::new(0, 5).position, 1);
        assert_eq!(CohortRank::new(9, 5).position, 5);
        assert_eq!(CohortRank::new(3, 5).position, 3);
    }

    #[test]
    fn best_and_worst_flags() {
        assert!(CohortRank::new(1, 8).is_best());
        assert!(CohortRank::new(8, 8).is_worst());
        assert!(!CohortRank::new(4, 8).is_best());
        assert!(!CohortRank::new(4, 8).is_worst());
    }

    #[test]
    fn displays_as_position_of_total() {
        assert_eq!(format!("{}", CohortRank::new(2, 11)), "#2 of 11");
    }
}
