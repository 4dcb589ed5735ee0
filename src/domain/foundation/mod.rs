//! Shared domain primitives (value objects, enums, errors).

mod errors;
mod geo;
mod numeric;
mod percentile;
mod product_type;
mod rank;

pub use errors::ValidationError;
pub use geo::GeoCode;
pub use numeric::{approx_eq, format_number, pct_diff, EPSILON};
pub use percentile::Percentile;
pub use product_type::ProductType;
pub use rank::CohortRank;
