use std::env;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use campus_core::model::{
    Assignment, AssignmentId, Course, CourseId, CourseReview, Enrollment, GradeSheet, Lesson,
    NewCourse, Quiz, QuizAttempt, QuizId, Submission, SubmissionId,
};

use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::quiz_session::AnswerSheet;

use super::types::{
    AssignmentDto, AttemptDto, CourseDto, CreateCourseRequest, EnrollmentDto, GradeRequest,
    LessonDto, LoginRequest, LoginResponse, QuizDto, ReviewDto, SubmissionDto, SubmitQuizRequest,
};
use super::{AssignmentGateway, AuthGateway, CourseGateway, EnrollmentGateway, QuizGateway};

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("CAMPUS_API_URL").unwrap_or_else(|_| "http://localhost:8000/api".into());
        Self { base_url }
    }
}

/// The one place that talks HTTP and inspects status codes. Everything else
/// sees `ApiError` variants.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    config: ApiConfig,
    session: AuthSession,
}

impl HttpGateway {
    #[must_use]
    pub fn new(config: ApiConfig, session: AuthSession) -> Self {
        Self {
            client: Client::new(),
            config,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Status-code triage, decided once for every endpoint: 401 ends the
    /// session, 403 means the enrollment gate, 404 is a distinct state.
    async fn triage(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::UNAUTHORIZED => {
                warn!("backend answered 401, clearing session token");
                self.session.clear().await;
                Err(ApiError::Unauthorized)
            }
            StatusCode::FORBIDDEN => Err(ApiError::NotEnrolled),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            other => Err(ApiError::Status(other)),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let mut request = self.client.get(self.url(path));
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        let response = self.triage(request.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let mut request = self.client.post(self.url(path)).json(body);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        let response = self.triage(request.send().await?).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CourseGateway for HttpGateway {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        let dtos: Vec<CourseDto> = self.get_json("/courses").await?;
        dtos.into_iter().map(CourseDto::into_domain).collect()
    }

    async fn get_course(&self, id: CourseId) -> Result<Course, ApiError> {
        let dto: CourseDto = self.get_json(&format!("/courses/{id}")).await?;
        dto.into_domain()
    }

    async fn list_lessons(&self, course: CourseId) -> Result<Vec<Lesson>, ApiError> {
        let dtos: Vec<LessonDto> = self.get_json(&format!("/courses/{course}/lessons")).await?;
        dtos.into_iter().map(LessonDto::into_domain).collect()
    }

    async fn list_reviews(&self, course: CourseId) -> Result<Vec<CourseReview>, ApiError> {
        let dtos: Vec<ReviewDto> = self.get_json(&format!("/courses/{course}/reviews")).await?;
        dtos.into_iter().map(ReviewDto::into_domain).collect()
    }

    async fn create_course(&self, new_course: &NewCourse) -> Result<Course, ApiError> {
        let dto: CourseDto = self
            .post_json("/courses", &CreateCourseRequest::from_new_course(new_course))
            .await?;
        dto.into_domain()
    }
}

#[async_trait]
impl EnrollmentGateway for HttpGateway {
    async fn list_my_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        let dtos: Vec<EnrollmentDto> = self.get_json("/me/enrollments").await?;
        Ok(dtos.into_iter().map(EnrollmentDto::into_domain).collect())
    }

    async fn enroll(&self, course: CourseId) -> Result<Enrollment, ApiError> {
        let dto: EnrollmentDto = self
            .post_json(&format!("/courses/{course}/enroll"), &serde_json::json!({}))
            .await?;
        Ok(dto.into_domain())
    }
}

#[async_trait]
impl QuizGateway for HttpGateway {
    async fn get_quiz(&self, id: QuizId) -> Result<Quiz, ApiError> {
        let dto: QuizDto = self.get_json(&format!("/quizzes/{id}")).await?;
        dto.into_domain()
    }

    async fn submit_quiz(&self, id: QuizId, sheet: &AnswerSheet) -> Result<QuizAttempt, ApiError> {
        let dto: AttemptDto = self
            .post_json(
                &format!("/quizzes/{id}/submit"),
                &SubmitQuizRequest::from_sheet(sheet),
            )
            .await?;
        dto.into_domain()
    }

    async fn list_my_attempts(&self) -> Result<Vec<QuizAttempt>, ApiError> {
        let dtos: Vec<AttemptDto> = self.get_json("/me/attempts").await?;
        dtos.into_iter().map(AttemptDto::into_domain).collect()
    }
}

#[async_trait]
impl AssignmentGateway for HttpGateway {
    async fn list_assignments(&self, course: CourseId) -> Result<Vec<Assignment>, ApiError> {
        let dtos: Vec<AssignmentDto> = self
            .get_json(&format!("/courses/{course}/assignments"))
            .await?;
        dtos.into_iter().map(AssignmentDto::into_domain).collect()
    }

    async fn list_submissions(&self, assignment: AssignmentId) -> Result<Vec<Submission>, ApiError> {
        let dtos: Vec<SubmissionDto> = self
            .get_json(&format!("/assignments/{assignment}/submissions"))
            .await?;
        Ok(dtos.into_iter().map(SubmissionDto::into_domain).collect())
    }

    async fn grade_submission(
        &self,
        id: SubmissionId,
        sheet: &GradeSheet,
    ) -> Result<Submission, ApiError> {
        let dto: SubmissionDto = self
            .post_json(
                &format!("/submissions/{id}/grade"),
                &GradeRequest::from_sheet(sheet),
            )
            .await?;
        Ok(dto.into_domain())
    }
}

#[async_trait]
impl AuthGateway for HttpGateway {
    async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let response: LoginResponse = self
            .post_json("/auth/login", &LoginRequest { email, password })
            .await?;
        Ok(response.token)
    }
}
