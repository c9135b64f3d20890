use dioxus::prelude::*;
use dioxus_router::Link;
use stacks_core::model::{SectionId, StackId, StepId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{SectionVm, StepVm, map_tutorial};

#[component]
pub fn StackView(stack_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    // Bumped after each toggle so the page re-reads the store.
    let revision = use_signal(|| 0_u64);
    let _ = revision();

    let id = StackId::new(stack_id);
    let Some(stack) = catalog.find(&id) else {
        return rsx! {
            div { class: "page",
                h2 { "Stack not found" }
                Link { to: Route::Home {}, "Back to Home" }
            }
        };
    };

    let tutorial = map_tutorial(stack, progress.percent_complete(&id), |step| {
        progress.is_step_completed(&id, step)
    });
    let steps_label = tutorial.steps_label();
    let width = format!("width: {}%", tutorial.percent);
    let stack_key = tutorial.stack_id.clone();
    let sections = tutorial.sections.clone();

    rsx! {
        div { class: "page",
            Link { to: Route::Home {}, "Back to Home" }
            h2 { "{tutorial.name}" }
            p { class: "overview", "{tutorial.overview}" }

            div { class: "progress",
                span { class: "progress-label", "{tutorial.percent}% complete" }
                span { class: "progress-steps", "{steps_label}" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "{width}" }
                }
            }

            if !tutorial.prerequisites.is_empty() {
                section { class: "prerequisites",
                    h3 { "Prerequisites" }
                    ul {
                        for item in tutorial.prerequisites.iter() {
                            li { "{item}" }
                        }
                    }
                }
            }

            for section in sections {
                TutorialSection {
                    stack_id: stack_key.clone(),
                    section,
                    revision,
                }
            }
        }
    }
}

#[component]
fn TutorialSection(stack_id: String, section: SectionVm, revision: Signal<u64>) -> Element {
    let done = section.completed_count();
    let total = section.steps.len();
    let section_key = section.id.clone();
    let steps = section.steps.clone();

    rsx! {
        section { class: "tutorial-section",
            header {
                h3 { "{section.title}" }
                span { class: "section-meta", "{section.estimated_time} · {done}/{total}" }
            }
            p { "{section.description}" }
            ol { class: "steps",
                for step in steps {
                    TutorialStep {
                        stack_id: stack_id.clone(),
                        section_id: section_key.clone(),
                        step,
                        revision,
                    }
                }
            }
        }
    }
}

#[component]
fn TutorialStep(
    stack_id: String,
    section_id: String,
    step: StepVm,
    revision: Signal<u64>,
) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = ctx.progress();
    let (class, label) = if step.completed {
        ("step step--done", "Completed")
    } else {
        ("step", "Mark complete")
    };
    let step_id = step.id.clone();

    rsx! {
        li { class: "{class}",
            div { class: "step-header",
                h4 { "{step.title}" }
                button {
                    class: "btn step-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let progress = progress.clone();
                        let stack_id = StackId::new(stack_id.clone());
                        let section_id = SectionId::new(section_id.clone());
                        let step_id = StepId::new(step_id.clone());
                        let mut revision = revision;
                        spawn(async move {
                            progress.toggle_step(&stack_id, &section_id, &step_id).await;
                            revision += 1;
                        });
                    },
                    "{label}"
                }
            }
            p { "{step.content}" }
            if let Some(code) = step.code_example.as_ref() {
                pre { class: "code",
                    code { "data-language": step.language.clone().unwrap_or_default(), "{code}" }
                }
            }
        }
    }
}
