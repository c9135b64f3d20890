use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

const STYLESHEET: Asset = asset!("/assets/style.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: STYLESHEET }
        document::Title { "Dev Stacks" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    PageError { message: format!("{errors:?}") }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Shown when a page fails to render. Saved progress is untouched.
#[component]
fn PageError(message: String) -> Element {
    rsx! {
        div { class: "fatal",
            h1 { "Dev Stacks could not show this page" }
            p { "Your saved progress is safe. Restart the app to try again." }
            details {
                summary { "Error details" }
                pre { "{message}" }
            }
        }
    }
}
