//! Single-vs-cohort analysis.
//!
//! One product scored against a peer group: percentile/rank strengths
//! and weaknesses, score-band verdicts, and absolute-threshold
//! classifications, degrading to "no verdict" on thin or flat data.

mod analysis_item;
mod cohort_analyzer;

pub use analysis_item::{
    AnalysisItem, CohortAnalysis, CohortFallback, ComparisonMode, FallbackReason, PriceBracket,
};
pub use cohort_analyzer::{SignificancePolicy, SingleVsCohortAnalyzer};
