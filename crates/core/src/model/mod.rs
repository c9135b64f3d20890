mod catalog;
mod comparison;
mod filter;
mod ids;
pub mod progress;

pub use catalog::{
    Catalog, CatalogError, Difficulty, Section, StackCatalog, StackKind, Step, TechStack,
};
pub use comparison::{ComparisonError, ComparisonRow, StackComparison};
pub use filter::CatalogFilter;
pub use ids::{ParseIdError, SectionId, StackId, StepId};
pub use progress::{
    ProgressOverview, ProgressRecord, ProgressState, StackProgress, StepStatus, is_step_completed,
    percent_complete, round_percent,
};
