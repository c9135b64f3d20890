use stacks_core::model::ProgressOverview;

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressEntryVm {
    pub stack_id: String,
    pub name: String,
    pub description: String,
    pub percent: u8,
    pub steps_label: String,
    pub last_updated_str: String,
    pub finished: bool,
}

/// Dashboard figures for the progress page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressOverviewVm {
    pub stacks_started: usize,
    pub stacks_completed: usize,
    pub completed_steps: usize,
    pub hours_label: String,
    pub entries: Vec<ProgressEntryVm>,
}

impl ProgressOverviewVm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&ProgressOverview> for ProgressOverviewVm {
    fn from(overview: &ProgressOverview) -> Self {
        Self {
            stacks_started: overview.stacks_started,
            stacks_completed: overview.stacks_completed,
            completed_steps: overview.completed_steps,
            hours_label: format!("{}h", overview.hours_invested),
            entries: overview
                .entries
                .iter()
                .map(|entry| ProgressEntryVm {
                    stack_id: entry.stack_id.to_string(),
                    name: entry.name.clone(),
                    description: entry.description.clone(),
                    percent: entry.percent,
                    steps_label: format!("{} of {} steps", entry.completed, entry.total),
                    last_updated_str: format_date(entry.last_updated),
                    finished: entry.is_finished(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacks_core::model::{Catalog, ProgressState, SectionId, StackId, StepId};
    use stacks_core::time::fixed_now;

    #[test]
    fn maps_overview_entries() {
        let catalog = Catalog::builtin().unwrap();
        let mut state = ProgressState::new();
        state.toggle_step(
            &StackId::new("mern"),
            &SectionId::new("setup"),
            &StepId::new("nodejs-install"),
            fixed_now(),
        );
        let overview = ProgressOverview::summarize(&state, &catalog);
        let vm = ProgressOverviewVm::from(&overview);

        assert_eq!(vm.stacks_started, 1);
        assert_eq!(vm.hours_label, "1h");
        assert_eq!(vm.entries[0].steps_label, "1 of 3 steps");
        assert_eq!(vm.entries[0].last_updated_str, "2023-11-14");
        assert!(!vm.entries[0].finished);
    }
}
