use stacks_core::model::{StackComparison, StackId, TechStack};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRowVm {
    pub label: String,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonVm {
    pub left_name: String,
    pub left_description: String,
    pub right_name: String,
    pub right_description: String,
    pub rows: Vec<ComparisonRowVm>,
}

/// Entry of a stack selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackOptionVm {
    pub id: String,
    pub label: String,
}

#[must_use]
pub fn map_comparison(comparison: &StackComparison<'_>) -> ComparisonVm {
    ComparisonVm {
        left_name: comparison.left().name().to_owned(),
        left_description: comparison.left().description().to_owned(),
        right_name: comparison.right().name().to_owned(),
        right_description: comparison.right().description().to_owned(),
        rows: comparison
            .rows()
            .into_iter()
            .map(|row| ComparisonRowVm {
                label: row.label.to_owned(),
                left: row.left,
                right: row.right,
            })
            .collect(),
    }
}

/// Selector options, leaving out the stack chosen on the other side.
#[must_use]
pub fn map_stack_options(stacks: &[TechStack], exclude: Option<&StackId>) -> Vec<StackOptionVm> {
    stacks
        .iter()
        .filter(|stack| exclude.is_none_or(|id| stack.id() != id))
        .map(|stack| StackOptionVm {
            id: stack.id().to_string(),
            label: stack.name().to_owned(),
        })
        .collect()
}
