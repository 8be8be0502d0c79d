use chrono::{DateTime, Utc};

use crate::model::ids::{CourseId, EnrollmentId, StudentId};

/// A record linking a student account to a course, gating access to graded
/// content. Plain data; the backend owns all invariants here.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub course_id: CourseId,
    pub student_id: StudentId,
    pub enrolled_at: DateTime<Utc>,
    pub progress_percent: f32,
}

impl Enrollment {
    /// Progress clamped to the displayable 0..=100 range; backends have been
    /// seen reporting 100.00001 after float accumulation.
    #[must_use]
    pub fn display_progress(&self) -> f32 {
        self.progress_percent.clamp(0.0, 100.0)
    }
}
