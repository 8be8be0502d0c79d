//! Shared error types for the services crate.

use thiserror::Error;

use campus_core::model::{DraftError, GradeError};
use storage::repository::StorageError;

/// The tagged outcome taxonomy for every backend call, decided once at the
/// HTTP boundary. Call sites match on variants instead of re-inspecting
/// status codes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("not signed in or session expired")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("not enrolled in this course")]
    NotEnrolled,

    #[error("backend returned status {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `AssignmentService` when grading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GradingError {
    #[error(transparent)]
    Grade(#[from] GradeError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `QuizFlowService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `DraftService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DraftServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
