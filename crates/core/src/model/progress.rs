use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};

use crate::model::catalog::StackCatalog;
use crate::model::ids::{SectionId, StackId, StepId};

/// Estimated effort per completed step, used for the "time invested" stat.
pub const MINUTES_PER_STEP: u64 = 30;

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

/// Completion state for a single stack.
///
/// `completed_sections` is carried through persistence but nothing derives
/// section-level completion from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    completed_steps: BTreeSet<StepId>,
    completed_sections: BTreeSet<SectionId>,
    last_updated: DateTime<Utc>,
}

impl ProgressRecord {
    /// A fresh record with nothing completed.
    #[must_use]
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            completed_steps: BTreeSet::new(),
            completed_sections: BTreeSet::new(),
            last_updated: now,
        }
    }

    /// Rehydrate a record from storage. Duplicate ids collapse into the set.
    #[must_use]
    pub fn from_persisted(
        completed_steps: impl IntoIterator<Item = StepId>,
        completed_sections: impl IntoIterator<Item = SectionId>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            completed_steps: completed_steps.into_iter().collect(),
            completed_sections: completed_sections.into_iter().collect(),
            last_updated,
        }
    }

    #[must_use]
    pub fn completed_steps(&self) -> &BTreeSet<StepId> {
        &self.completed_steps
    }

    #[must_use]
    pub fn completed_sections(&self) -> &BTreeSet<SectionId> {
        &self.completed_sections
    }

    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_steps.len()
    }

    #[must_use]
    pub fn is_step_completed(&self, step_id: &StepId) -> bool {
        self.completed_steps.contains(step_id)
    }

    /// Flip membership of `step_id` and stamp the record.
    pub fn toggle(&mut self, step_id: &StepId, now: DateTime<Utc>) -> StepStatus {
        let status = if self.completed_steps.remove(step_id) {
            StepStatus::Incomplete
        } else {
            self.completed_steps.insert(step_id.clone());
            StepStatus::Completed
        };
        self.last_updated = now;
        status
    }
}

/// Membership of a step after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Incomplete,
}

impl StepStatus {
    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(self, StepStatus::Completed)
    }
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// All progress records, keyed by stack. This is the unit of persistence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressState {
    records: BTreeMap<StackId, ProgressRecord>,
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = (StackId, ProgressRecord)>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn record(&self, stack_id: &StackId) -> Option<&ProgressRecord> {
        self.records.get(stack_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StackId, &ProgressRecord)> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Toggle a step, creating the stack's record on first use.
    ///
    /// `section_id` is accepted for callers that track it but does not take
    /// part in completion. Records are never pruned, even when they end up
    /// with no completed steps.
    pub fn toggle_step(
        &mut self,
        stack_id: &StackId,
        _section_id: &SectionId,
        step_id: &StepId,
        now: DateTime<Utc>,
    ) -> StepStatus {
        self.records
            .entry(stack_id.clone())
            .or_insert_with(|| ProgressRecord::empty(now))
            .toggle(step_id, now)
    }
}

//
// ─── ACCESSORS ─────────────────────────────────────────────────────────────────
//

/// `round(100 * done / total)` with halves rounded away from zero.
///
/// Returns 0 when `total` is 0 and never exceeds 100.
#[must_use]
pub fn round_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done as u128;
    let total = total as u128;
    let percent = (200 * done + total) / (2 * total);
    u8::try_from(percent.min(100)).unwrap_or(100)
}

/// Percentage of the stack's current catalog steps that are completed.
///
/// Unknown stacks and stacks without a record yield 0. Step ids no longer in
/// the catalog still count toward the numerator.
#[must_use]
pub fn percent_complete(state: &ProgressState, catalog: &dyn StackCatalog, stack_id: &StackId) -> u8 {
    let Some(record) = state.record(stack_id) else {
        return 0;
    };
    let Some(stack) = catalog.find_by_id(stack_id) else {
        return 0;
    };
    round_percent(record.completed_count(), stack.total_steps())
}

#[must_use]
pub fn is_step_completed(state: &ProgressState, stack_id: &StackId, step_id: &StepId) -> bool {
    state
        .record(stack_id)
        .is_some_and(|record| record.is_step_completed(step_id))
}

//
// ─── OVERVIEW ──────────────────────────────────────────────────────────────────
//

/// Progress of one started stack, joined with its catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackProgress {
    pub stack_id: StackId,
    pub name: String,
    pub description: String,
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
    pub last_updated: DateTime<Utc>,
}

impl StackProgress {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

/// Dashboard totals across every started stack.
///
/// Records for stacks missing from the catalog are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressOverview {
    pub stacks_started: usize,
    pub stacks_completed: usize,
    pub completed_steps: usize,
    pub hours_invested: u64,
    /// Most recently updated first.
    pub entries: Vec<StackProgress>,
}

impl ProgressOverview {
    #[must_use]
    pub fn summarize(state: &ProgressState, catalog: &dyn StackCatalog) -> Self {
        let mut entries: Vec<StackProgress> = state
            .iter()
            .filter_map(|(stack_id, record)| {
                let stack = catalog.find_by_id(stack_id)?;
                let total = stack.total_steps();
                Some(StackProgress {
                    stack_id: stack_id.clone(),
                    name: stack.name().to_owned(),
                    description: stack.description().to_owned(),
                    completed: record.completed_count(),
                    total,
                    percent: round_percent(record.completed_count(), total),
                    last_updated: record.last_updated(),
                })
            })
            .collect();
        entries.sort_by(|a, b| {
            b.last_updated
                .cmp(&a.last_updated)
                .then_with(|| a.stack_id.cmp(&b.stack_id))
        });

        let completed_steps: usize = entries.iter().map(|e| e.completed).sum();
        let minutes = completed_steps as u64 * MINUTES_PER_STEP;

        Self {
            stacks_started: entries.len(),
            stacks_completed: entries.iter().filter(|e| e.is_finished()).count(),
            completed_steps,
            hours_invested: (minutes + 30) / 60,
            entries,
        }
    }
}
