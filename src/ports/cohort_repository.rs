//! CohortRepository port for fetching comparison cohorts

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ProductType;
use crate::domain::spec::ProductRecord;

/// Errors surfaced by cohort repositories.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    #[error("Repository unavailable: {reason}")]
    Unavailable { reason: String },
}

impl RepositoryError {
    /// Creates an unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        RepositoryError::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Read access to the product store.
///
/// Implementations return fully-formed spec records; the core never
/// mutates or persists them.
#[async_trait]
pub trait CohortRepository: Send + Sync {
    /// Returns every product of a category.
    async fn get_all(&self, product_type: ProductType) -> Result<Vec<ProductRecord>, RepositoryError>;
}
