//! Comparison engines and shared comparison machinery.
//!
//! # Components
//!
//! - `ComparisonSettings` - Tunable thresholds shared by all modes
//! - `stats` - Cohort statistics (mean, percentile, rank, variance)
//! - `scoring` - Domain scorers for suspension and IP ratings
//! - `text` - Tier ladders and phrase builders
//! - `HeadToHeadComparator` - Pairwise comparison with composites
//! - `MultiComparator` - N-way "best at" selection
//!
//! All comparators are pure: catalog, rankings, and settings go in by
//! reference, advantages come out, nothing is cached between calls.

mod advantage;
mod head_to_head;
mod multi;
pub mod scoring;
mod settings;
pub mod stats;
pub mod text;

pub use advantage::Advantage;
pub use head_to_head::{HeadToHeadComparator, HeadToHeadResult};
pub use multi::MultiComparator;
pub use settings::ComparisonSettings;
pub use text::LabelStyle;
