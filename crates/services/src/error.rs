//! Shared error types for the services crate.

use thiserror::Error;

use stacks_core::model::{CatalogError, ComparisonError, StackId};
use storage::sqlite::SqliteInitError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error("unknown stack: {0}")]
    UnknownStack(StackId),
    #[error("the catalog needs at least two stacks to compare")]
    NotEnoughStacks,
    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
