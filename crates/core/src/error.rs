use thiserror::Error;

use crate::model::{
    AssignmentError, AttemptError, CourseError, DraftError, GradeError, LessonError, QuestionError,
    QuizError, ReviewError,
};

/// Umbrella error for domain validation failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Grade(#[from] GradeError),
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error(transparent)]
    Draft(#[from] DraftError),
}
