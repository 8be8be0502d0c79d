use std::sync::Arc;

use services::{
    AssignmentService, AuthService, AuthSession, CatalogService, DraftService, QuizFlowService,
};

/// What the composition root (crates/app, or the test harness) must provide
/// to the views.
pub trait UiApp: Send + Sync {
    fn auth(&self) -> Arc<AuthService>;
    fn catalog(&self) -> Arc<CatalogService>;
    fn assignments(&self) -> Arc<AssignmentService>;
    fn quiz_flow(&self) -> Arc<QuizFlowService>;
    fn drafts(&self) -> Arc<DraftService>;
}

#[derive(Clone)]
pub struct AppContext {
    auth: Arc<AuthService>,
    catalog: Arc<CatalogService>,
    assignments: Arc<AssignmentService>,
    quiz_flow: Arc<QuizFlowService>,
    drafts: Arc<DraftService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            auth: app.auth(),
            catalog: app.catalog(),
            assignments: app.assignments(),
            quiz_flow: app.quiz_flow(),
            drafts: app.drafts(),
        }
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn session(&self) -> AuthSession {
        self.auth.session().clone()
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn assignments(&self) -> Arc<AssignmentService> {
        Arc::clone(&self.assignments)
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    #[must_use]
    pub fn drafts(&self) -> Arc<DraftService> {
        Arc::clone(&self.drafts)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
