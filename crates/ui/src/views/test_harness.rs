use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use health_core::model::{QuizCatalog, UserId};
use health_core::time::fixed_clock;
use services::{AppServices, QuizService, QuizTiming};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{AboutView, ActivityView, BmiView, HomeView, QuizView, TipsView};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Bmi,
    Activity,
    Tips,
    Quiz,
    About,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: AppServices,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = Arc::new(props.app.clone());
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
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
        ViewKind::Bmi => rsx! { BmiView {} },
        ViewKind::Activity => rsx! { ActivityView {} },
        ViewKind::Tips => rsx! { TipsView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::About => rsx! { AboutView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub app: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let subscriptions and reloading resources settle.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_storage(view, &Storage::in_memory())
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    let quiz = QuizService::with_seed(QuizCatalog::builtin(), 11).with_timing(QuizTiming::immediate());
    let app = AppServices::from_storage(storage, fixed_clock(), UserId::local()).with_quiz(quiz);

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: app.clone(),
            view,
        },
    );

    ViewHarness { dom, app }
}
