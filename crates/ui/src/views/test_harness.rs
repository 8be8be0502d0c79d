use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use campus_core::time::fixed_clock;
use services::api::InMemoryGateway;
use services::{
    AssignmentService, AuthService, AuthSession, CatalogService, DraftService, QuizFlowService,
};
use storage::repository::InMemoryStore;

use crate::context::{UiApp, build_app_context};
use crate::views::{CoursesView, HomeView, QuizView, SubmissionsView};

#[derive(Clone)]
struct TestApp {
    auth: Arc<AuthService>,
    catalog: Arc<CatalogService>,
    assignments: Arc<AssignmentService>,
    quiz_flow: Arc<QuizFlowService>,
    drafts: Arc<DraftService>,
}

impl UiApp for TestApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn assignments(&self) -> Arc<AssignmentService> {
        Arc::clone(&self.assignments)
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    fn drafts(&self) -> Arc<DraftService> {
        Arc::clone(&self.drafts)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Courses,
    Quiz(u64),
    Submissions(u64),
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
        ViewKind::Courses => rsx! { CoursesView {} },
        ViewKind::Quiz(quiz_id) => rsx! { QuizView { quiz_id } },
        ViewKind::Submissions(assignment_id) => rsx! { SubmissionsView { assignment_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub gateway: InMemoryGateway,
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

    /// Drive until resources and spawned tasks have settled.
    pub async fn settle(&mut self) {
        for _ in 0..5 {
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

pub async fn setup_view_harness(view: ViewKind, gateway: InMemoryGateway) -> ViewHarness {
    let store = Arc::new(InMemoryStore::new());
    let session = AuthSession::restore(store.clone())
        .await
        .expect("restore session");

    let app = Arc::new(TestApp {
        auth: Arc::new(AuthService::new(Arc::new(gateway.clone()), session)),
        catalog: Arc::new(CatalogService::new(
            Arc::new(gateway.clone()),
            Arc::new(gateway.clone()),
        )),
        assignments: Arc::new(AssignmentService::new(Arc::new(gateway.clone()))),
        quiz_flow: Arc::new(QuizFlowService::new(
            Arc::new(gateway.clone()),
            Arc::new(gateway.clone()),
        )),
        drafts: Arc::new(DraftService::new(fixed_clock(), store)),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, gateway }
}

/// Harness whose catalog is backed by a custom course gateway, for driving
/// error states.
pub async fn setup_view_harness_with_catalog(
    view: ViewKind,
    gateway: InMemoryGateway,
    catalog: Arc<CatalogService>,
) -> ViewHarness {
    let store = Arc::new(InMemoryStore::new());
    let session = AuthSession::restore(store.clone())
        .await
        .expect("restore session");

    let app = Arc::new(TestApp {
        auth: Arc::new(AuthService::new(Arc::new(gateway.clone()), session)),
        catalog,
        assignments: Arc::new(AssignmentService::new(Arc::new(gateway.clone()))),
        quiz_flow: Arc::new(QuizFlowService::new(
            Arc::new(gateway.clone()),
            Arc::new(gateway.clone()),
        )),
        drafts: Arc::new(DraftService::new(fixed_clock(), store)),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, gateway }
}
