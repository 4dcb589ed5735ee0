//! Application layer: orchestration over ports and the pure core.

mod cohort_service;

pub use cohort_service::{AnalysisError, CohortAnalysisService};
