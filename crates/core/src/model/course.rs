use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::CourseId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("course category cannot be empty")]
    EmptyCategory,

    #[error("average rating must be between 1 and 5")]
    InvalidAverageRating,
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Publication state of a course as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

impl CourseStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CourseStatus::Draft => "Draft",
            CourseStatus::Published => "Published",
            CourseStatus::Archived => "Archived",
        }
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A course in the catalog. Immutable from the client's perspective;
/// mutations happen server-side and are re-fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    instructor: String,
    category: String,
    status: CourseStatus,
    average_rating: Option<f32>,
    created_at: DateTime<Utc>,
}

impl Course {
    /// Build a course from backend data, validating the fields the UI
    /// depends on.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if the title or category is empty, or if the
    /// reported average rating is outside 1..=5.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        instructor: impl Into<String>,
        category: impl Into<String>,
        status: CourseStatus,
        average_rating: Option<f32>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, CourseError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        let category = category.into();
        if category.trim().is_empty() {
            return Err(CourseError::EmptyCategory);
        }
        if let Some(rating) = average_rating {
            if !(1.0..=5.0).contains(&rating) {
                return Err(CourseError::InvalidAverageRating);
            }
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            instructor: instructor.into(),
            category,
            status,
            average_rating,
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
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
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn status(&self) -> CourseStatus {
        self.status
    }

    #[must_use]
    pub fn average_rating(&self) -> Option<f32> {
        self.average_rating
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
