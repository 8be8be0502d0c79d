#![forbid(unsafe_code)]

pub mod api;
pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod drafts;
pub mod error;
pub mod quiz_flow;
pub mod quiz_session;

pub use campus_core::Clock;

pub use error::{
    ApiError, AuthError, CatalogError, DraftServiceError, GradingError, QuizFlowError,
};

pub use api::{ApiConfig, HttpGateway, InMemoryGateway};
pub use assignments::AssignmentService;
pub use auth::{AuthService, AuthSession};
pub use catalog::CatalogService;
pub use drafts::{AUTOSAVE_DELAY, DraftService};
pub use quiz_flow::{QuizFlowService, SubmitOutcome};
pub use quiz_session::{AnswerSheet, QuizSession, SessionError, SheetEntry, Tick};
