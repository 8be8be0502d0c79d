use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::CourseId;

/// Upper bound on review comment length.
pub const MAX_COMMENT_LEN: usize = 1000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReviewError {
    #[error("rating must be between 1 and 5")]
    InvalidRating,

    #[error("comment exceeds {MAX_COMMENT_LEN} characters ({len})")]
    CommentTooLong { len: usize },
}

/// A student's star rating and comment on a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseReview {
    course_id: CourseId,
    student_name: String,
    rating: u8,
    comment: String,
    created_at: DateTime<Utc>,
}

impl CourseReview {
    /// # Errors
    ///
    /// Returns `ReviewError` for a rating outside 1..=5 or an over-long
    /// comment.
    pub fn new(
        course_id: CourseId,
        student_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ReviewError> {
        if !(1..=5).contains(&rating) {
            return Err(ReviewError::InvalidRating);
        }
        let comment = comment.into();
        if comment.chars().count() > MAX_COMMENT_LEN {
            return Err(ReviewError::CommentTooLong {
                len: comment.chars().count(),
            });
        }

        Ok(Self {
            course_id,
            student_name: student_name.into(),
            rating,
            comment,
            created_at,
        })
    }

    #[must_use]
    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    #[must_use]
    pub fn rating(&self) -> u8 {
        self.rating
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
