use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{AssignmentId, CourseId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssignmentError {
    #[error("assignment title cannot be empty")]
    EmptyTitle,

    #[error("assignment max points must be > 0")]
    InvalidMaxPoints,
}

/// Graded coursework with an optional deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    id: AssignmentId,
    course_id: CourseId,
    title: String,
    description: String,
    due_at: Option<DateTime<Utc>>,
    max_points: u32,
}

impl Assignment {
    /// Build an assignment from backend data.
    ///
    /// # Errors
    ///
    /// Returns `AssignmentError` for a blank title or zero max points.
    pub fn new(
        id: AssignmentId,
        course_id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        due_at: Option<DateTime<Utc>>,
        max_points: u32,
    ) -> Result<Self, AssignmentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(AssignmentError::EmptyTitle);
        }
        if max_points == 0 {
            return Err(AssignmentError::InvalidMaxPoints);
        }

        Ok(Self {
            id,
            course_id,
            title,
            description: description.into(),
            due_at,
            max_points,
        })
    }

    #[must_use]
    pub fn id(&self) -> AssignmentId {
        self.id
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    /// Whether the deadline has passed. Assignments without a deadline are
    /// never overdue.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.due_at.is_some_and(|due| due < now)
    }
}
