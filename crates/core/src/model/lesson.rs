use thiserror::Error;
use url::Url;

use crate::model::ids::{CourseId, LessonId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson title cannot be empty")]
    EmptyTitle,

    #[error("lesson video url is invalid: {0}")]
    InvalidVideoUrl(#[from] url::ParseError),
}

/// A single lesson inside a course. The body is markdown authored on the
/// backend; the UI renders it sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    course_id: CourseId,
    title: String,
    body: String,
    video_url: Option<Url>,
    position: u32,
}

impl Lesson {
    /// Build a lesson from backend data.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyTitle` for a blank title and
    /// `LessonError::InvalidVideoUrl` when the optional video link does not
    /// parse as a URL.
    pub fn new(
        id: LessonId,
        course_id: CourseId,
        title: impl Into<String>,
        body: impl Into<String>,
        video_url: Option<&str>,
        position: u32,
    ) -> Result<Self, LessonError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LessonError::EmptyTitle);
        }
        let video_url = video_url.map(Url::parse).transpose()?;

        Ok(Self {
            id,
            course_id,
            title,
            body: body.into(),
            video_url,
            position,
        })
    }

    #[must_use]
    pub fn id(&self) -> LessonId {
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
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn video_url(&self) -> Option<&Url> {
        self.video_url.as_ref()
    }

    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_title() {
        let err = Lesson::new(LessonId::new(1), CourseId::new(1), "  ", "body", None, 0).unwrap_err();
        assert_eq!(err, LessonError::EmptyTitle);
    }

    #[test]
    fn rejects_malformed_video_url() {
        let err = Lesson::new(
            LessonId::new(1),
            CourseId::new(1),
            "Intro",
            "body",
            Some("not a url"),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, LessonError::InvalidVideoUrl(_)));
    }

    #[test]
    fn keeps_valid_video_url() {
        let lesson = Lesson::new(
            LessonId::new(1),
            CourseId::new(1),
            "Intro",
            "body",
            Some("https://videos.example.com/intro.mp4"),
            0,
        )
        .unwrap();
        assert_eq!(
            lesson.video_url().map(Url::as_str),
            Some("https://videos.example.com/intro.mp4")
        );
    }
}
