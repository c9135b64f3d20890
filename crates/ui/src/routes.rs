use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CompareView, HomeView, ProgressView, StackView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/stacks/:stack_id", StackView)] Stack { stack_id: String },
        #[route("/compare", CompareView)] Compare {},
        #[route("/progress", ProgressView)] Progress {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            NavBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavBar() -> Element {
    rsx! {
        nav { class: "navbar",
            h1 { "Dev Stacks" }
            ul {
                li { Link { to: Route::Home {}, "Stacks" } }
                li { Link { to: Route::Compare {}, "Compare" } }
                li { Link { to: Route::Progress {}, "Progress" } }
            }
        }
    }
}
