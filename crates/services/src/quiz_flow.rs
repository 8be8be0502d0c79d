//! Orchestrates the quiz lifecycle around `QuizSession`: fetch, guarded
//! submission, and the not-enrolled recovery path.

use std::sync::Arc;

use tracing::{debug, warn};

use campus_core::model::{CourseId, Enrollment, QuizAttempt, QuizId};

use crate::api::{EnrollmentGateway, QuizGateway};
use crate::error::{ApiError, QuizFlowError};
use crate::quiz_session::QuizSession;

/// Outcome of one submit call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The backend accepted and graded the attempt; the session is over.
    Completed(QuizAttempt),
    /// The backend's enrollment gate rejected the attempt. The session is
    /// active again; the caller offers enrollment and may resubmit.
    NotEnrolled,
    /// Another submission was already in flight (or the quiz was already
    /// accepted); nothing was sent.
    Ignored,
}

#[derive(Clone)]
pub struct QuizFlowService {
    quizzes: Arc<dyn QuizGateway>,
    enrollments: Arc<dyn EnrollmentGateway>,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(quizzes: Arc<dyn QuizGateway>, enrollments: Arc<dyn EnrollmentGateway>) -> Self {
        Self {
            quizzes,
            enrollments,
        }
    }

    /// Fetch the quiz and start a session for it.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Api(ApiError::NotFound)` for an unknown quiz,
    /// other `ApiError` variants for transport failures.
    pub async fn start(&self, id: QuizId) -> Result<QuizSession, QuizFlowError> {
        let quiz = self.quizzes.get_quiz(id).await?;
        debug!(quiz = %id, questions = quiz.len(), "quiz session started");
        Ok(QuizSession::new(quiz))
    }

    /// Submit the session's answers, whether user- or timeout-initiated.
    /// Confirmation for the manual path is the caller's concern; by the time
    /// this runs, the decision to submit has been made.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError` for backend failures other than the
    /// enrollment gate; the session is reopened first so the user can retry.
    pub async fn submit(&self, session: &mut QuizSession) -> Result<SubmitOutcome, QuizFlowError> {
        let Ok(sheet) = session.begin_submit() else {
            return Ok(SubmitOutcome::Ignored);
        };

        let quiz_id = session.quiz().id();
        match self.quizzes.submit_quiz(quiz_id, &sheet).await {
            Ok(attempt) => {
                debug!(quiz = %quiz_id, score = attempt.score(), "attempt accepted");
                session.complete(attempt.clone());
                Ok(SubmitOutcome::Completed(attempt))
            }
            Err(ApiError::NotEnrolled) => {
                warn!(quiz = %quiz_id, "submission rejected by enrollment gate");
                session.submission_failed();
                Ok(SubmitOutcome::NotEnrolled)
            }
            Err(err) => {
                session.submission_failed();
                Err(QuizFlowError::Api(err))
            }
        }
    }

    /// The recovery path offered after `SubmitOutcome::NotEnrolled`.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError` if enrolling fails; the caller navigates away.
    pub async fn enroll(&self, course: CourseId) -> Result<Enrollment, QuizFlowError> {
        Ok(self.enrollments.enroll(course).await?)
    }

    /// Attempt history for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError` for transport or backend failures.
    pub async fn recent_attempts(&self) -> Result<Vec<QuizAttempt>, QuizFlowError> {
        Ok(self.quizzes.list_my_attempts().await?)
    }
}
