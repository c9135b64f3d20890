use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use stacks_core::model::{
    self, ProgressOverview, ProgressRecord, ProgressState, SectionId, StackCatalog, StackId,
    StepId, StepStatus,
};
use storage::repository::KeyValueRepository;
use storage::snapshot::{PROGRESS_STORAGE_KEY, decode_state, encode_state};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, warn};

use crate::Clock;

/// Owns the in-memory progress state and keeps durable storage in sync.
///
/// Build one with [`ProgressStore::load`] at startup and share it behind an
/// `Arc`. Persistence is best-effort: read and write failures are logged and
/// the in-memory state stays authoritative for the session.
///
/// Toggles run one at a time through `save_guard`, so storage always ends up
/// holding the snapshot of the latest toggle.
pub struct ProgressStore {
    clock: Clock,
    catalog: Arc<dyn StackCatalog>,
    repo: Arc<dyn KeyValueRepository>,
    state: Mutex<ProgressState>,
    save_guard: AsyncMutex<()>,
}

impl ProgressStore {
    /// Load the persisted state, falling back to an empty state.
    ///
    /// Never fails: an absent key yields an empty state, and unreadable or
    /// malformed data is logged and discarded.
    pub async fn load(
        clock: Clock,
        catalog: Arc<dyn StackCatalog>,
        repo: Arc<dyn KeyValueRepository>,
    ) -> Self {
        let state = match repo.get(PROGRESS_STORAGE_KEY).await {
            Ok(Some(raw)) => match decode_state(&raw, clock.now()) {
                Ok(state) => {
                    info!(stacks = state.len(), "loaded progress");
                    state
                }
                Err(err) => {
                    warn!(error = %err, "discarding malformed progress data");
                    ProgressState::new()
                }
            },
            Ok(None) => {
                debug!("no saved progress; starting empty");
                ProgressState::new()
            }
            Err(err) => {
                warn!(error = %err, "failed to read progress; starting empty");
                ProgressState::new()
            }
        };

        Self {
            clock,
            catalog,
            repo,
            state: Mutex::new(state),
            save_guard: AsyncMutex::new(()),
        }
    }

    /// Toggle a step's completion and persist the full state.
    ///
    /// `section_id` is accepted for callers that know it; completion is
    /// tracked per step only.
    pub async fn toggle_step(
        &self,
        stack_id: &StackId,
        section_id: &SectionId,
        step_id: &StepId,
    ) -> StepStatus {
        let _saving = self.save_guard.lock().await;
        let (status, snapshot) = {
            let mut state = self.lock();
            let status = state.toggle_step(stack_id, section_id, step_id, self.clock.now());
            (status, state.clone())
        };
        let in_catalog = self
            .catalog
            .find_by_id(stack_id)
            .and_then(|stack| stack.find_step(step_id))
            .is_some();
        debug!(%stack_id, %step_id, ?status, in_catalog, "toggled step");
        self.save(&snapshot).await;
        status
    }

    /// Record for a stack, if any toggle was ever issued for it.
    #[must_use]
    pub fn record(&self, stack_id: &StackId) -> Option<ProgressRecord> {
        self.lock().record(stack_id).cloned()
    }

    /// Rounded percentage of the stack's steps completed, 0 for unknown stacks.
    #[must_use]
    pub fn percent_complete(&self, stack_id: &StackId) -> u8 {
        model::percent_complete(&self.lock(), self.catalog.as_ref(), stack_id)
    }

    #[must_use]
    pub fn is_step_completed(&self, stack_id: &StackId, step_id: &StepId) -> bool {
        model::is_step_completed(&self.lock(), stack_id, step_id)
    }

    #[must_use]
    pub fn overview(&self) -> ProgressOverview {
        ProgressOverview::summarize(&self.lock(), self.catalog.as_ref())
    }

    /// Copy of the current in-memory state.
    #[must_use]
    pub fn snapshot(&self) -> ProgressState {
        self.lock().clone()
    }

    async fn save(&self, state: &ProgressState) {
        let encoded = match encode_state(state) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, "failed to encode progress; keeping in-memory state");
                return;
            }
        };
        if let Err(err) = self.repo.put(PROGRESS_STORAGE_KEY, &encoded).await {
            warn!(error = %err, "failed to save progress; keeping in-memory state");
        }
    }

    // Every mutation completes before its guard drops, so poisoned data is intact.
    fn lock(&self) -> MutexGuard<'_, ProgressState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacks_core::model::Catalog;
    use stacks_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    async fn store_with(repo: InMemoryRepository) -> ProgressStore {
        let catalog: Arc<dyn StackCatalog> = Arc::new(Catalog::builtin().unwrap());
        ProgressStore::load(fixed_clock(), catalog, Arc::new(repo)).await
    }

    #[tokio::test]
    async fn reading_never_creates_a_record() {
        let store = store_with(InMemoryRepository::new()).await;
        let mern = StackId::new("mern");
        assert!(store.record(&mern).is_none());
        assert_eq!(store.percent_complete(&mern), 0);
        assert!(!store.is_step_completed(&mern, &StepId::new("nodejs-install")));
        assert!(store.record(&mern).is_none());
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn toggle_persists_immediately() {
        let repo = InMemoryRepository::new();
        let store = store_with(repo.clone()).await;

        let status = store
            .toggle_step(
                &StackId::new("mern"),
                &SectionId::new("setup"),
                &StepId::new("nodejs-install"),
            )
            .await;
        assert!(status.is_completed());

        let raw = repo.get(PROGRESS_STORAGE_KEY).await.unwrap().unwrap();
        assert!(raw.contains("nodejs-install"), "unexpected payload {raw}");
    }
}
