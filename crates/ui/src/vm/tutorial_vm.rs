use stacks_core::model::{StepId, TechStack};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub id: String,
    pub title: String,
    pub content: String,
    pub code_example: Option<String>,
    pub language: Option<String>,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub estimated_time: String,
    pub steps: Vec<StepVm>,
}

impl SectionVm {
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|step| step.completed).count()
    }
}

/// Everything the tutorial page renders for one stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorialVm {
    pub stack_id: String,
    pub name: String,
    pub overview: String,
    pub prerequisites: Vec<String>,
    pub percent: u8,
    pub sections: Vec<SectionVm>,
}

impl TutorialVm {
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.sections.iter().map(|section| section.steps.len()).sum()
    }

    /// Catalog steps currently marked complete.
    #[must_use]
    pub fn completed_steps(&self) -> usize {
        self.sections.iter().map(SectionVm::completed_count).sum()
    }

    #[must_use]
    pub fn steps_label(&self) -> String {
        format!("{} of {} steps", self.completed_steps(), self.total_steps())
    }
}

#[must_use]
pub fn map_tutorial(
    stack: &TechStack,
    percent: u8,
    is_completed: impl Fn(&StepId) -> bool,
) -> TutorialVm {
    let sections = stack
        .sections()
        .iter()
        .map(|section| SectionVm {
            id: section.id().to_string(),
            title: section.title().to_owned(),
            description: section.description().to_owned(),
            estimated_time: section.estimated_time().to_owned(),
            steps: section
                .steps()
                .iter()
                .map(|step| StepVm {
                    id: step.id().to_string(),
                    title: step.title().to_owned(),
                    content: step.content().to_owned(),
                    code_example: step.code_example().map(str::to_owned),
                    language: step.language().map(str::to_owned),
                    completed: is_completed(step.id()),
                })
                .collect(),
        })
        .collect();

    TutorialVm {
        stack_id: stack.id().to_string(),
        name: stack.name().to_owned(),
        overview: stack.overview().to_owned(),
        prerequisites: stack.prerequisites().to_vec(),
        percent,
        sections,
    }
}
