use dioxus::prelude::*;
use dioxus_router::Link;
use stacks_core::model::StackId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ComparisonRowVm, StackOptionVm, map_comparison, map_stack_options};

#[component]
pub fn CompareView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let (initial_left, initial_right) = match catalog.default_comparison() {
        Ok(pair) => (pair.left().id().to_string(), pair.right().id().to_string()),
        Err(_) => (String::new(), String::new()),
    };
    let mut left = use_signal(move || initial_left);
    let mut right = use_signal(move || initial_right);

    let left_id = StackId::new(left());
    let right_id = StackId::new(right());
    let left_options = map_stack_options(catalog.all(), Some(&right_id));
    let right_options = map_stack_options(catalog.all(), Some(&left_id));
    let comparison = catalog.compare(&left_id, &right_id).ok().map(|c| map_comparison(&c));
    let left_value = left_id.to_string();
    let right_value = right_id.to_string();

    rsx! {
        div { class: "page",
            Link { to: Route::Home {}, "Back to Home" }
            h2 { "Compare Tech Stacks" }
            p { "Compare key attributes of two tech stacks side by side." }

            div { class: "compare-selectors",
                StackSelect {
                    label: "Left",
                    value: left_value,
                    options: left_options,
                    on_select: move |id: String| left.set(id),
                }
                StackSelect {
                    label: "Right",
                    value: right_value,
                    options: right_options,
                    on_select: move |id: String| right.set(id),
                }
            }

            match comparison {
                Some(vm) => rsx! {
                    table { class: "compare-table",
                        thead {
                            tr {
                                th {}
                                th {
                                    h3 { "{vm.left_name}" }
                                    p { "{vm.left_description}" }
                                }
                                th {
                                    h3 { "{vm.right_name}" }
                                    p { "{vm.right_description}" }
                                }
                            }
                        }
                        tbody {
                            for row in vm.rows {
                                CompareRow { row }
                            }
                        }
                    }
                },
                None => rsx! {
                    p { "Pick two different stacks to compare." }
                },
            }
        }
    }
}

#[component]
fn StackSelect(
    label: &'static str,
    value: String,
    options: Vec<StackOptionVm>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "compare-select",
            span { "{label}" }
            select {
                value: "{value}",
                onchange: move |evt| on_select.call(evt.value()),
                for opt in options {
                    option { value: "{opt.id}", selected: opt.id == value, "{opt.label}" }
                }
            }
        }
    }
}

#[component]
fn CompareRow(row: ComparisonRowVm) -> Element {
    rsx! {
        tr {
            th { scope: "row", "{row.label}" }
            td {
                ul {
                    for item in row.left.iter() {
                        li { "{item}" }
                    }
                }
            }
            td {
                ul {
                    for item in row.right.iter() {
                        li { "{item}" }
                    }
                }
            }
        }
    }
}
