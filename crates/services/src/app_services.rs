use std::sync::Arc;

use stacks_core::model::{Catalog, StackCatalog};
use storage::repository::Storage;

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::progress_store::ProgressStore;

/// Assembles app-facing services around one catalog and one progress store.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressStore>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// built-in catalog is invalid.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(storage, Arc::new(Catalog::builtin()?), clock).await)
    }

    /// Build services whose progress only lives for this process.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the built-in catalog is invalid.
    pub async fn in_memory(clock: Clock) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(Catalog::builtin()?);
        Ok(Self::from_storage(Storage::in_memory(), catalog, clock).await)
    }

    /// Build services over explicit storage and catalog, loading saved progress.
    pub async fn from_storage(storage: Storage, catalog: Arc<Catalog>, clock: Clock) -> Self {
        let lookup: Arc<dyn StackCatalog> = catalog.clone();
        let progress = Arc::new(ProgressStore::load(clock, lookup, Arc::clone(&storage.kv)).await);
        let catalog = Arc::new(CatalogService::new(catalog));
        Self { catalog, progress }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }
}
