//! Wire shapes for the REST backend, kept separate from the domain models
//! and converted with validation at this boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campus_core::model::{
    AnswerOption, Assignment, AssignmentId, AttemptId, Course, CourseId, CourseReview,
    CourseStatus, Enrollment, EnrollmentId, GradeSheet, Lesson, LessonId, NewCourse, OptionId,
    Question, QuestionId, Quiz, QuizAttempt, QuizId, StudentId, Submission, SubmissionId,
};

use crate::error::ApiError;
use crate::quiz_session::AnswerSheet;

fn decode<T, E: std::fmt::Display>(result: Result<T, E>) -> Result<T, ApiError> {
    result.map_err(|err| ApiError::Decode(err.to_string()))
}

//
// ─── COURSES ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct CourseDto {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub instructor_name: String,
    pub category: String,
    pub status: String,
    pub average_rating: Option<f32>,
    pub created_at: DateTime<Utc>,
}

impl CourseDto {
    pub fn into_domain(self) -> Result<Course, ApiError> {
        let status = match self.status.as_str() {
            "draft" => CourseStatus::Draft,
            "published" => CourseStatus::Published,
            "archived" => CourseStatus::Archived,
            other => {
                return Err(ApiError::Decode(format!("unknown course status: {other}")));
            }
        };
        decode(Course::new(
            CourseId::new(self.id),
            self.title,
            self.description,
            self.instructor_name,
            self.category,
            status,
            self.average_rating,
            self.created_at,
        ))
    }
}

#[derive(Debug, Serialize)]
pub struct CreateCourseRequest<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
}

impl<'a> CreateCourseRequest<'a> {
    #[must_use]
    pub fn from_new_course(new_course: &'a NewCourse) -> Self {
        Self {
            title: &new_course.title,
            description: &new_course.description,
            category: &new_course.category,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LessonDto {
    pub id: u64,
    pub course_id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub video_url: Option<String>,
    #[serde(default)]
    pub position: u32,
}

impl LessonDto {
    pub fn into_domain(self) -> Result<Lesson, ApiError> {
        decode(Lesson::new(
            LessonId::new(self.id),
            CourseId::new(self.course_id),
            self.title,
            self.content,
            self.video_url.as_deref(),
            self.position,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct ReviewDto {
    pub course_id: u64,
    pub student_name: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewDto {
    pub fn into_domain(self) -> Result<CourseReview, ApiError> {
        decode(CourseReview::new(
            CourseId::new(self.course_id),
            self.student_name,
            self.rating,
            self.comment,
            self.created_at,
        ))
    }
}

//
// ─── ENROLLMENTS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct EnrollmentDto {
    pub id: u64,
    pub course_id: u64,
    pub student_id: u64,
    pub enrolled_at: DateTime<Utc>,
    #[serde(default)]
    pub progress_percent: f32,
}

impl EnrollmentDto {
    #[must_use]
    pub fn into_domain(self) -> Enrollment {
        Enrollment {
            id: EnrollmentId::new(self.id),
            course_id: CourseId::new(self.course_id),
            student_id: StudentId::new(self.student_id),
            enrolled_at: self.enrolled_at,
            progress_percent: self.progress_percent,
        }
    }
}

//
// ─── QUIZZES ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct QuizDto {
    pub id: u64,
    pub course_id: u64,
    pub title: String,
    pub time_limit_minutes: Option<u32>,
    pub passing_score: f64,
    pub questions: Vec<QuestionDto>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionDto {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub points: u32,
    pub options: Vec<OptionDto>,
}

#[derive(Debug, Deserialize)]
pub struct OptionDto {
    pub id: u64,
    pub text: String,
    pub is_correct: Option<bool>,
}

impl QuizDto {
    pub fn into_domain(self) -> Result<Quiz, ApiError> {
        let questions = self
            .questions
            .into_iter()
            .map(|question| {
                let options = question
                    .options
                    .into_iter()
                    .map(|option| AnswerOption {
                        id: OptionId::new(option.id),
                        text: option.text,
                        is_correct: option.is_correct,
                    })
                    .collect();
                decode(Question::new(
                    QuestionId::new(question.id),
                    question.text,
                    question.points,
                    options,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        decode(Quiz::new(
            QuizId::new(self.id),
            CourseId::new(self.course_id),
            self.title,
            self.time_limit_minutes,
            self.passing_score,
            questions,
        ))
    }
}

#[derive(Debug, Serialize)]
pub struct SubmitQuizRequest {
    pub answers: Vec<SubmitAnswer>,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswer {
    pub question_id: u64,
    pub selected_option_id: Option<u64>,
}

impl SubmitQuizRequest {
    #[must_use]
    pub fn from_sheet(sheet: &AnswerSheet) -> Self {
        Self {
            answers: sheet
                .entries
                .iter()
                .map(|entry| SubmitAnswer {
                    question_id: entry.question_id.value(),
                    selected_option_id: entry.selected_option_id.map(|id| id.value()),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AttemptDto {
    pub id: u64,
    pub quiz_id: u64,
    pub score: f64,
    #[serde(default)]
    pub earned_points: u32,
    #[serde(default)]
    pub total_points: u32,
    pub completed_at: DateTime<Utc>,
}

impl AttemptDto {
    pub fn into_domain(self) -> Result<QuizAttempt, ApiError> {
        decode(QuizAttempt::new(
            AttemptId::new(self.id),
            QuizId::new(self.quiz_id),
            self.score,
            self.earned_points,
            self.total_points,
            self.completed_at,
        ))
    }
}

//
// ─── ASSIGNMENTS ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct AssignmentDto {
    pub id: u64,
    pub course_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_at: Option<DateTime<Utc>>,
    pub max_points: u32,
}

impl AssignmentDto {
    pub fn into_domain(self) -> Result<Assignment, ApiError> {
        decode(Assignment::new(
            AssignmentId::new(self.id),
            CourseId::new(self.course_id),
            self.title,
            self.description,
            self.due_at,
            self.max_points,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmissionDto {
    pub id: u64,
    pub assignment_id: u64,
    pub student_id: u64,
    pub student_name: String,
    #[serde(default)]
    pub content: String,
    pub submitted_at: DateTime<Utc>,
    pub grade: Option<f64>,
    pub feedback: Option<String>,
}

impl SubmissionDto {
    #[must_use]
    pub fn into_domain(self) -> Submission {
        Submission::new(
            SubmissionId::new(self.id),
            AssignmentId::new(self.assignment_id),
            StudentId::new(self.student_id),
            self.student_name,
            self.content,
            self.submitted_at,
            self.grade,
            self.feedback,
        )
    }
}

#[derive(Debug, Serialize)]
pub struct GradeRequest<'a> {
    pub grade: f64,
    pub feedback: &'a str,
}

impl<'a> GradeRequest<'a> {
    #[must_use]
    pub fn from_sheet(sheet: &'a GradeSheet) -> Self {
        Self {
            grade: sheet.grade().value(),
            feedback: sheet.feedback(),
        }
    }
}

//
// ─── AUTH ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
