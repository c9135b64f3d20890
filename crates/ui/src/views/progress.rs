use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ProgressEntryVm, ProgressOverviewVm};

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = ProgressOverviewVm::from(&ctx.progress().overview());

    rsx! {
        div { class: "page",
            h2 { "Your Learning Progress" }

            div { class: "stats",
                StatCard { label: "Stacks Started", value: vm.stacks_started.to_string() }
                StatCard { label: "Stacks Completed", value: vm.stacks_completed.to_string() }
                StatCard { label: "Total Steps", value: vm.completed_steps.to_string() }
                StatCard { label: "Time Invested", value: vm.hours_label.clone() }
            }

            if vm.is_empty() {
                div { class: "empty-state",
                    h3 { "Start Your Learning Journey" }
                    p { "Pick a tech stack and mark steps complete to track your progress here." }
                    Link { to: Route::Home {}, "Browse Tech Stacks" }
                }
            } else {
                ul { class: "progress-list",
                    for entry in vm.entries {
                        ProgressEntry { entry }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[component]
fn ProgressEntry(entry: ProgressEntryVm) -> Element {
    let width = format!("width: {}%", entry.percent);
    let status = if entry.finished { "Completed" } else { "In progress" };

    rsx! {
        li { class: "progress-entry",
            div { class: "progress-entry-head",
                h3 { "{entry.name}" }
                span { class: "badge", "{status}" }
            }
            p { "{entry.description}" }
            div { class: "progress-meta",
                span { "{entry.percent}%" }
                span { "{entry.steps_label}" }
                span { "Last updated {entry.last_updated_str}" }
            }
            div { class: "progress-bar",
                div { class: "progress-fill", style: "{width}" }
            }
            Link { to: Route::Stack { stack_id: entry.stack_id.clone() }, "Continue" }
        }
    }
}
