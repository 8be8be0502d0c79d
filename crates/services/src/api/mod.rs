//! Backend gateway: trait contracts, the reqwest implementation, and an
//! in-memory fake for tests.

use async_trait::async_trait;

use campus_core::model::{
    Assignment, AssignmentId, Course, CourseId, CourseReview, Enrollment, GradeSheet, Lesson,
    NewCourse, Quiz, QuizAttempt, QuizId, Submission, SubmissionId,
};

use crate::error::ApiError;
use crate::quiz_session::AnswerSheet;

mod http;
pub mod memory;
mod types;

pub use http::{ApiConfig, HttpGateway};
pub use memory::InMemoryGateway;

/// Course catalog operations.
#[async_trait]
pub trait CourseGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id.
    async fn get_course(&self, id: CourseId) -> Result<Course, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    async fn list_lessons(&self, course: CourseId) -> Result<Vec<Lesson>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    async fn list_reviews(&self, course: CourseId) -> Result<Vec<CourseReview>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    async fn create_course(&self, new_course: &NewCourse) -> Result<Course, ApiError>;
}

/// Enrollment operations for the signed-in student.
#[async_trait]
pub trait EnrollmentGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    async fn list_my_enrollments(&self) -> Result<Vec<Enrollment>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    async fn enroll(&self, course: CourseId) -> Result<Enrollment, ApiError>;
}

/// Quiz fetch/submit operations.
#[async_trait]
pub trait QuizGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id.
    async fn get_quiz(&self, id: QuizId) -> Result<Quiz, ApiError>;

    /// Deliver an answer sheet for grading.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotEnrolled` when the backend rejects the attempt
    /// with its enrollment 403, other `ApiError` variants otherwise.
    async fn submit_quiz(&self, id: QuizId, sheet: &AnswerSheet) -> Result<QuizAttempt, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    async fn list_my_attempts(&self) -> Result<Vec<QuizAttempt>, ApiError>;
}

/// Assignment and grading operations.
#[async_trait]
pub trait AssignmentGateway: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    async fn list_assignments(&self, course: CourseId) -> Result<Vec<Assignment>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    async fn list_submissions(&self, assignment: AssignmentId) -> Result<Vec<Submission>, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    async fn grade_submission(
        &self,
        id: SubmissionId,
        sheet: &GradeSheet,
    ) -> Result<Submission, ApiError>;
}

/// Credential exchange. The token lifecycle itself lives in `AuthSession`.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` for rejected credentials, other
    /// `ApiError` variants for transport failures.
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError>;
}
