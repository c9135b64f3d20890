use std::sync::Arc;

use stacks_core::model::{
    Catalog, CatalogFilter, StackCatalog, StackComparison, StackId, TechStack,
};

use crate::error::CatalogServiceError;

/// Read-only queries over the stack catalog used by the listing and
/// comparison screens.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn all(&self) -> &[TechStack] {
        self.catalog.stacks()
    }

    /// Stacks matching the filter, in catalog order.
    #[must_use]
    pub fn list(&self, filter: &CatalogFilter) -> Vec<&TechStack> {
        filter.apply(self.catalog.stacks())
    }

    #[must_use]
    pub fn find(&self, stack_id: &StackId) -> Option<&TechStack> {
        self.catalog.find_by_id(stack_id)
    }

    /// Compare two distinct stacks.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::UnknownStack` if either id is not in the
    /// catalog, or `CatalogServiceError::Comparison` if both ids are the same.
    pub fn compare(
        &self,
        left: &StackId,
        right: &StackId,
    ) -> Result<StackComparison<'_>, CatalogServiceError> {
        let left = self
            .find(left)
            .ok_or_else(|| CatalogServiceError::UnknownStack(left.clone()))?;
        let right = self
            .find(right)
            .ok_or_else(|| CatalogServiceError::UnknownStack(right.clone()))?;
        Ok(StackComparison::new(left, right)?)
    }

    /// The initial pair shown on the comparison screen.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::NotEnoughStacks` when the catalog has fewer
    /// than two stacks.
    pub fn default_comparison(&self) -> Result<StackComparison<'_>, CatalogServiceError> {
        StackComparison::default_pair(self.catalog.as_ref())
            .ok_or(CatalogServiceError::NotEnoughStacks)
    }
}
