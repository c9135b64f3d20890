use dioxus::prelude::*;
use dioxus_router::Link;
use stacks_core::model::{CatalogFilter, Difficulty, StackKind};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{
    StackCardVm, format_showing, map_stack_cards, parse_difficulty_option, parse_kind_option,
};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let progress = ctx.progress();
    let mut query = use_signal(String::new);
    let mut difficulty = use_signal(|| "all".to_string());
    let mut kind = use_signal(|| "all".to_string());

    let query_value = query();
    let difficulty_value = difficulty();
    let kind_value = kind();

    let filter = CatalogFilter::new()
        .with_query(query_value.clone())
        .with_difficulty(parse_difficulty_option(&difficulty_value))
        .with_kind(parse_kind_option(&kind_value));
    let shown = catalog.list(&filter);
    let cards = map_stack_cards(&shown, |id| progress.percent_complete(id));
    let showing = format_showing(cards.len(), catalog.all().len());

    rsx! {
        div { class: "page",
            h2 { "Tech Stacks" }

            div { class: "filters",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search stacks, technologies, tags...",
                    value: "{query_value}",
                    oninput: move |evt| query.set(evt.value()),
                }
                select {
                    value: "{difficulty_value}",
                    onchange: move |evt| difficulty.set(evt.value()),
                    option { value: "all", "All levels" }
                    for level in Difficulty::ALL {
                        option { value: "{level}", "{level}" }
                    }
                }
                select {
                    value: "{kind_value}",
                    onchange: move |evt| kind.set(evt.value()),
                    option { value: "all", "All types" }
                    for k in StackKind::ALL {
                        option { value: "{k}", "{k}" }
                    }
                }
            }

            p { class: "showing", "{showing}" }

            if cards.is_empty() {
                div { class: "empty",
                    p { "No tech stacks found." }
                    p { "Try adjusting your search or filter criteria." }
                }
            } else {
                div { class: "stack-grid",
                    for card in cards {
                        StackCard { card }
                    }
                }
            }
        }
    }
}

#[component]
fn StackCard(card: StackCardVm) -> Element {
    let progress_label = card.progress_label();
    let width = format!("width: {}%", card.percent);

    rsx! {
        article { class: "stack-card",
            header {
                h3 { "{card.name}" }
                if card.trending {
                    span { class: "badge badge--trending", "Trending" }
                }
            }
            p { class: "stack-card-description", "{card.description}" }
            div { class: "stack-card-meta",
                span { class: "badge", "{card.difficulty}" }
                span { class: "badge", "{card.kind}" }
                span { "{card.estimated_time}" }
                span { "★ {card.rating}" }
            }
            ul { class: "tags",
                for tag in card.tags.iter() {
                    li { key: "{tag}", "{tag}" }
                }
            }
            if card.has_progress() {
                div { class: "progress",
                    span { class: "progress-label", "Progress {progress_label}" }
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "{width}" }
                    }
                }
            }
            Link { class: "stack-card-link", to: Route::Stack { stack_id: card.id.clone() },
                "Start Learning"
            }
        }
    }
}
