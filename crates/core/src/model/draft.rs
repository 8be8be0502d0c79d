use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed key under which the course-creation draft is cached locally.
pub const COURSE_DRAFT_KEY: &str = "course:new";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DraftError {
    #[error("course title is required")]
    EmptyTitle,

    #[error("course category is required")]
    EmptyCategory,
}

/// Unsaved course form state, cached locally so it survives accidental
/// navigation away. Intentionally unvalidated; validation happens when the
/// user actually creates the course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl CourseDraft {
    /// Whether the draft carries anything worth persisting.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
            && self.description.trim().is_empty()
            && self.category.trim().is_empty()
    }

    /// Validate the draft into a creation payload.
    ///
    /// # Errors
    ///
    /// Returns `DraftError` when a required field is blank; the caller shows
    /// these as field-level messages without touching the network.
    pub fn validate(self) -> Result<NewCourse, DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.category.trim().is_empty() {
            return Err(DraftError::EmptyCategory);
        }

        Ok(NewCourse {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
        })
    }
}

/// A validated course-creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub category: String,
}
