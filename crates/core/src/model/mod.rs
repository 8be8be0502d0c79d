mod assignment;
mod attempt;
mod course;
mod draft;
mod enrollment;
mod ids;
mod lesson;
mod quiz;
mod review;
mod submission;

pub use ids::{
    AssignmentId, AttemptId, CourseId, EnrollmentId, LessonId, OptionId, ParseIdError, QuestionId,
    QuizId, StudentId, SubmissionId,
};

pub use assignment::{Assignment, AssignmentError};
pub use attempt::{AttemptError, QuizAttempt};
pub use course::{Course, CourseError, CourseStatus};
pub use draft::{COURSE_DRAFT_KEY, CourseDraft, DraftError, NewCourse};
pub use enrollment::Enrollment;
pub use lesson::{Lesson, LessonError};
pub use quiz::{AnswerOption, Question, QuestionError, Quiz, QuizError};
pub use review::{CourseReview, MAX_COMMENT_LEN, ReviewError};
pub use submission::{
    Grade, GradeError, GradeSheet, MAX_FEEDBACK_LEN, Submission, SubmissionStatus,
};
