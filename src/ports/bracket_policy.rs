//! BracketPolicy port for price brackets and significance thresholds

use crate::domain::analysis::{PriceBracket, SignificancePolicy};
use crate::domain::foundation::ProductType;

/// Pricing configuration consumed by cohort analysis.
///
/// Supplies the price bracket for a product and the shared
/// advantage/weakness significance rule. The exact thresholds are
/// configuration owned by the implementation, not the core.
pub trait BracketPolicy: SignificancePolicy + Send + Sync {
    /// Returns the bracket containing `price`, if the product type has
    /// bracket tables configured.
    fn bracket_for(&self, price: f64, product_type: ProductType) -> Option<PriceBracket>;

    /// Minimum number of products for a bracket cohort to be usable.
    fn min_bracket_size(&self) -> usize;
}
