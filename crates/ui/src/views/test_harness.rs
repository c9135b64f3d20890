use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, CatalogService, ProgressStore};
use stacks_core::model::{Catalog, SectionId, StackId, StepId};
use stacks_core::time::fixed_clock;
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{CompareView, HomeView, ProgressView, StackView};

#[derive(Clone)]
struct TestApp {
    catalog: Arc<CatalogService>,
    progress: Arc<ProgressStore>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Stack(String),
    Compare,
    Progress,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Stack(stack_id) => rsx! { StackView { stack_id } },
        ViewKind::Compare => rsx! { CompareView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: Arc<ProgressStore>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Toggle a step directly on the store, bypassing the UI.
    pub async fn toggle(&self, stack: &str, section: &str, step: &str) {
        self.progress
            .toggle_step(
                &StackId::new(stack),
                &SectionId::new(section),
                &StepId::new(step),
            )
            .await;
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, Storage::in_memory()).await
}

pub async fn setup_view_harness_with_storage(view: ViewKind, storage: Storage) -> ViewHarness {
    let services = AppServices::from_storage(
        storage,
        Arc::new(Catalog::builtin().expect("builtin catalog")),
        fixed_clock(),
    )
    .await;

    let app = Arc::new(TestApp {
        catalog: services.catalog(),
        progress: services.progress(),
    });
    let progress = Arc::clone(&app.progress);

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, progress }
}
