use std::sync::Arc;

use tracing::debug;

use campus_core::model::{
    Assignment, AssignmentId, CourseId, GradeSheet, Submission, SubmissionId,
};

use crate::api::AssignmentGateway;
use crate::error::{ApiError, GradingError};

/// Assignment listings and instructor grading.
#[derive(Clone)]
pub struct AssignmentService {
    gateway: Arc<dyn AssignmentGateway>,
}

impl AssignmentService {
    #[must_use]
    pub fn new(gateway: Arc<dyn AssignmentGateway>) -> Self {
        Self { gateway }
    }

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    pub async fn list_assignments(&self, course: CourseId) -> Result<Vec<Assignment>, ApiError> {
        self.gateway.list_assignments(course).await
    }

    /// # Errors
    ///
    /// Returns `ApiError` for transport or backend failures.
    pub async fn list_submissions(
        &self,
        assignment: AssignmentId,
    ) -> Result<Vec<Submission>, ApiError> {
        self.gateway.list_submissions(assignment).await
    }

    /// Grade a submission. The grade and feedback are validated before any
    /// network traffic; invalid input never leaves the client.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::Grade` for out-of-range grade or over-long
    /// feedback, `GradingError::Api` for backend failures.
    pub async fn grade(
        &self,
        id: SubmissionId,
        grade: f64,
        feedback: &str,
    ) -> Result<Submission, GradingError> {
        let sheet = GradeSheet::new(grade, feedback)?;
        let graded = self.gateway.grade_submission(id, &sheet).await?;
        debug!(submission = %id, grade, "submission graded");
        Ok(graded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::InMemoryGateway;
    use campus_core::model::GradeError;
    use campus_core::model::StudentId;
    use campus_core::time::fixed_now;

    fn service_with_submission() -> (AssignmentService, SubmissionId) {
        let gateway = InMemoryGateway::new();
        let id = SubmissionId::new(5);
        gateway.push_submission(Submission::new(
            id,
            AssignmentId::new(1),
            StudentId::new(7),
            "Lin Chen",
            "my answer",
            fixed_now(),
            None,
            None,
        ));
        (AssignmentService::new(Arc::new(gateway)), id)
    }

    #[tokio::test]
    async fn invalid_grade_never_reaches_the_gateway() {
        let (service, id) = service_with_submission();
        let err = service.grade(id, 101.0, "nope").await.unwrap_err();
        assert!(matches!(err, GradingError::Grade(GradeError::OutOfRange)));
    }

    #[tokio::test]
    async fn grading_returns_the_updated_submission() {
        let (service, id) = service_with_submission();
        let graded = service.grade(id, 88.0, "solid work").await.unwrap();
        assert_eq!(graded.grade(), Some(88.0));
        assert_eq!(graded.feedback(), Some("solid work"));
    }
}
