use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{AssignmentId, StudentId, SubmissionId};

//
// ─── GRADING INPUT ─────────────────────────────────────────────────────────────
//

/// Upper bound on instructor feedback length.
pub const MAX_FEEDBACK_LEN: usize = 2000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GradeError {
    #[error("grade must be between 0 and 100")]
    OutOfRange,

    #[error("feedback exceeds {MAX_FEEDBACK_LEN} characters ({len})")]
    FeedbackTooLong { len: usize },
}

/// A validated grade percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grade(f64);

impl Grade {
    /// # Errors
    ///
    /// Returns `GradeError::OutOfRange` unless the value is within 0..=100.
    pub fn new(value: f64) -> Result<Self, GradeError> {
        if !(0.0..=100.0).contains(&value) || value.is_nan() {
            return Err(GradeError::OutOfRange);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Grade plus feedback, validated before it is ever sent over the network.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeSheet {
    grade: Grade,
    feedback: String,
}

impl GradeSheet {
    /// # Errors
    ///
    /// Returns `GradeError` for an out-of-range grade or over-long feedback.
    pub fn new(grade: f64, feedback: impl Into<String>) -> Result<Self, GradeError> {
        let grade = Grade::new(grade)?;
        let feedback = feedback.into();
        if feedback.chars().count() > MAX_FEEDBACK_LEN {
            return Err(GradeError::FeedbackTooLong {
                len: feedback.chars().count(),
            });
        }
        Ok(Self { grade, feedback })
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        self.grade
    }

    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

//
// ─── SUBMISSION ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    Submitted,
    Graded,
}

impl SubmissionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "Submitted",
            SubmissionStatus::Graded => "Graded",
        }
    }
}

/// A student's delivered answer to an assignment, possibly graded.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    id: SubmissionId,
    assignment_id: AssignmentId,
    student_id: StudentId,
    student_name: String,
    body: String,
    submitted_at: DateTime<Utc>,
    grade: Option<f64>,
    feedback: Option<String>,
}

impl Submission {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: SubmissionId,
        assignment_id: AssignmentId,
        student_id: StudentId,
        student_name: impl Into<String>,
        body: impl Into<String>,
        submitted_at: DateTime<Utc>,
        grade: Option<f64>,
        feedback: Option<String>,
    ) -> Self {
        Self {
            id,
            assignment_id,
            student_id,
            student_name: student_name.into(),
            body: body.into(),
            submitted_at,
            grade,
            feedback,
        }
    }

    #[must_use]
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    #[must_use]
    pub fn assignment_id(&self) -> AssignmentId {
        self.assignment_id
    }

    #[must_use]
    pub fn student_id(&self) -> StudentId {
        self.student_id
    }

    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    #[must_use]
    pub fn grade(&self) -> Option<f64> {
        self.grade
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Status is derived: a submission with a grade is graded.
    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        if self.grade.is_some() {
            SubmissionStatus::Graded
        } else {
            SubmissionStatus::Submitted
        }
    }

    /// Apply a grading result returned by the backend.
    pub fn apply_grade(&mut self, sheet: &GradeSheet) {
        self.grade = Some(sheet.grade().value());
        self.feedback = Some(sheet.feedback().to_string());
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn grade_bounds_are_inclusive() {
        assert!(Grade::new(0.0).is_ok());
        assert!(Grade::new(100.0).is_ok());
        assert_eq!(Grade::new(100.1).unwrap_err(), GradeError::OutOfRange);
        assert_eq!(Grade::new(-0.1).unwrap_err(), GradeError::OutOfRange);
    }

    #[test]
    fn grade_sheet_rejects_long_feedback() {
        let feedback = "x".repeat(MAX_FEEDBACK_LEN + 1);
        let err = GradeSheet::new(80.0, feedback).unwrap_err();
        assert!(matches!(err, GradeError::FeedbackTooLong { .. }));
    }

    #[test]
    fn status_follows_grade() {
        let mut submission = Submission::new(
            SubmissionId::new(1),
            AssignmentId::new(1),
            StudentId::new(1),
            "Lin Chen",
            "my answer",
            fixed_now(),
            None,
            None,
        );
        assert_eq!(submission.status(), SubmissionStatus::Submitted);

        submission.apply_grade(&GradeSheet::new(92.0, "Nice work").unwrap());
        assert_eq!(submission.status(), SubmissionStatus::Graded);
        assert_eq!(submission.grade(), Some(92.0));
    }
}
