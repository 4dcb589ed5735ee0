//! In-memory cohort repository, for tests and embedded use.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::foundation::ProductType;
use crate::domain::spec::ProductRecord;
use crate::ports::{CohortRepository, RepositoryError};

/// Repository backed by a plain map, read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCohortRepository {
    products: BTreeMap<ProductType, Vec<ProductRecord>>,
}

impl InMemoryCohortRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category of products (builder-style).
    pub fn with_products(mut self, product_type: ProductType, products: Vec<ProductRecord>) -> Self {
        self.products.entry(product_type).or_default().extend(products);
        self
    }
}

#[async_trait]
impl CohortRepository for InMemoryCohortRepository {
    async fn get_all(
        &self,
        product_type: ProductType,
    ) -> Result<Vec<ProductRecord>, RepositoryError> {
        Ok(self.products.get(&product_type).cloned().unwrap_or_default())
    }
}
