mod comparison_vm;
mod progress_vm;
mod stack_card_vm;
mod time_fmt;
mod tutorial_vm;

pub use comparison_vm::{
    ComparisonRowVm, ComparisonVm, StackOptionVm, map_comparison, map_stack_options,
};
pub use progress_vm::{ProgressEntryVm, ProgressOverviewVm};
pub use stack_card_vm::{
    StackCardVm, format_showing, map_stack_cards, parse_difficulty_option, parse_kind_option,
};
pub use tutorial_vm::{SectionVm, StepVm, TutorialVm, map_tutorial};
