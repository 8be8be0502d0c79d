use std::sync::Arc;

use tracing::debug;

use campus_core::model::{
    Course, CourseDraft, CourseId, CourseReview, Enrollment, Lesson,
};

use crate::api::{CourseGateway, EnrollmentGateway};
use crate::error::{ApiError, CatalogError};

/// Course catalog reads plus course creation and enrollment.
#[derive(Clone)]
pub struct CatalogService {
    courses: Arc<dyn CourseGateway>,
    enrollments: Arc<dyn EnrollmentGateway>,
}

impl CatalogService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseGateway>, enrollments: Arc<dyn EnrollmentGateway>) -> Self {
        Self {
            courses,
            enrollments,
        }
    }

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.courses.list_courses().await
    }

    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown course.
    pub async fn get_course(&self, id: CourseId) -> Result<Course, ApiError> {
        self.courses.get_course(id).await
    }

    /// Lessons sorted by their backend position.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    pub async fn list_lessons(&self, course: CourseId) -> Result<Vec<Lesson>, ApiError> {
        let mut lessons = self.courses.list_lessons(course).await?;
        lessons.sort_by_key(Lesson::position);
        Ok(lessons)
    }

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    pub async fn list_reviews(&self, course: CourseId) -> Result<Vec<CourseReview>, ApiError> {
        self.courses.list_reviews(course).await
    }

    /// Validate the draft and create the course. The draft is validated
    /// here, before any network traffic, so field errors surface without a
    /// request.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Draft` for validation failures and
    /// `CatalogError::Api` for backend failures.
    pub async fn create_course(&self, draft: CourseDraft) -> Result<Course, CatalogError> {
        let new_course = draft.validate()?;
        let course = self.courses.create_course(&new_course).await?;
        debug!(course = %course.id(), "course created");
        Ok(course)
    }

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    pub async fn my_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        self.enrollments.list_my_enrollments().await
    }

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    pub async fn enroll(&self, course: CourseId) -> Result<Enrollment, ApiError> {
        self.enrollments.enroll(course).await
    }
}
