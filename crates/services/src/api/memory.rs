//! In-memory gateway for tests and prototyping. Mirrors the backend's
//! observable behavior: enrollment gating on submit, graded attempts, 404s
//! for unknown ids.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;

use campus_core::Clock;
use campus_core::model::{
    Assignment, AssignmentId, AttemptId, Course, CourseId, CourseReview, Enrollment, EnrollmentId,
    GradeSheet, Lesson, NewCourse, CourseStatus, Quiz, QuizAttempt, QuizId, StudentId, Submission,
    SubmissionId,
};

use crate::error::ApiError;
use crate::quiz_session::AnswerSheet;

use super::{AssignmentGateway, AuthGateway, CourseGateway, EnrollmentGateway, QuizGateway};

#[derive(Default)]
struct State {
    courses: Vec<Course>,
    lessons: Vec<Lesson>,
    reviews: Vec<CourseReview>,
    quizzes: Vec<Quiz>,
    assignments: Vec<Assignment>,
    submissions: Vec<Submission>,
    enrollments: Vec<Enrollment>,
    attempts: Vec<QuizAttempt>,
    next_id: u64,
    fail_next_submit: bool,
}

impl State {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone)]
pub struct InMemoryGateway {
    clock: Clock,
    state: Arc<Mutex<State>>,
    submit_calls: Arc<AtomicU32>,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGateway {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Clock::default_clock(),
            state: Arc::new(Mutex::new(State {
                next_id: 1000,
                ..State::default()
            })),
            submit_calls: Arc::new(AtomicU32::new(0)),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn push_course(&self, course: Course) {
        self.lock().courses.push(course);
    }

    pub fn push_lesson(&self, lesson: Lesson) {
        self.lock().lessons.push(lesson);
    }

    pub fn push_review(&self, review: CourseReview) {
        self.lock().reviews.push(review);
    }

    pub fn push_quiz(&self, quiz: Quiz) {
        self.lock().quizzes.push(quiz);
    }

    pub fn push_assignment(&self, assignment: Assignment) {
        self.lock().assignments.push(assignment);
    }

    pub fn push_submission(&self, submission: Submission) {
        self.lock().submissions.push(submission);
    }

    pub fn push_enrollment(&self, enrollment: Enrollment) {
        self.lock().enrollments.push(enrollment);
    }

    /// Make the next submit fail with a generic backend error.
    pub fn fail_next_submit(&self) {
        self.lock().fail_next_submit = true;
    }

    /// How many submit requests actually reached this gateway.
    #[must_use]
    pub fn submit_call_count(&self) -> u32 {
        self.submit_calls.load(Ordering::SeqCst)
    }

    fn grade_sheet(quiz: &Quiz, sheet: &AnswerSheet) -> (u32, u32) {
        let total: u32 = quiz.questions().iter().map(|q| q.points()).sum();
        let earned: u32 = sheet
            .entries
            .iter()
            .filter_map(|entry| {
                let question = quiz.question(entry.question_id)?;
                let option = question.option(entry.selected_option_id?)?;
                (option.is_correct == Some(true)).then_some(question.points())
            })
            .sum();
        (earned, total)
    }
}

#[async_trait]
impl CourseGateway for InMemoryGateway {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        Ok(self.lock().courses.clone())
    }

    async fn get_course(&self, id: CourseId) -> Result<Course, ApiError> {
        self.lock()
            .courses
            .iter()
            .find(|course| course.id() == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn list_lessons(&self, course: CourseId) -> Result<Vec<Lesson>, ApiError> {
        Ok(self
            .lock()
            .lessons
            .iter()
            .filter(|lesson| lesson.course_id() == course)
            .cloned()
            .collect())
    }

    async fn list_reviews(&self, course: CourseId) -> Result<Vec<CourseReview>, ApiError> {
        Ok(self
            .lock()
            .reviews
            .iter()
            .filter(|review| review.course_id() == course)
            .cloned()
            .collect())
    }

    async fn create_course(&self, new_course: &NewCourse) -> Result<Course, ApiError> {
        let mut state = self.lock();
        let id = state.next_id();
        let course = Course::new(
            CourseId::new(id),
            new_course.title.clone(),
            new_course.description.clone(),
            "You",
            new_course.category.clone(),
            CourseStatus::Draft,
            None,
            self.clock.now(),
        )
        .map_err(|err| ApiError::Decode(err.to_string()))?;
        state.courses.push(course.clone());
        Ok(course)
    }
}

#[async_trait]
impl EnrollmentGateway for InMemoryGateway {
    async fn list_my_enrollments(&self) -> Result<Vec<Enrollment>, ApiError> {
        Ok(self.lock().enrollments.clone())
    }

    async fn enroll(&self, course: CourseId) -> Result<Enrollment, ApiError> {
        let mut state = self.lock();
        let id = state.next_id();
        let enrollment = Enrollment {
            id: EnrollmentId::new(id),
            course_id: course,
            student_id: StudentId::new(1),
            enrolled_at: self.clock.now(),
            progress_percent: 0.0,
        };
        state.enrollments.push(enrollment.clone());
        Ok(enrollment)
    }
}

#[async_trait]
impl QuizGateway for InMemoryGateway {
    async fn get_quiz(&self, id: QuizId) -> Result<Quiz, ApiError> {
        self.lock()
            .quizzes
            .iter()
            .find(|quiz| quiz.id() == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn submit_quiz(&self, id: QuizId, sheet: &AnswerSheet) -> Result<QuizAttempt, ApiError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        let mut state = self.lock();

        if state.fail_next_submit {
            state.fail_next_submit = false;
            return Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        }

        let quiz = state
            .quizzes
            .iter()
            .find(|quiz| quiz.id() == id)
            .cloned()
            .ok_or(ApiError::NotFound)?;

        let enrolled = state
            .enrollments
            .iter()
            .any(|enrollment| enrollment.course_id == quiz.course_id());
        if !enrolled {
            return Err(ApiError::NotEnrolled);
        }

        let (earned, total) = Self::grade_sheet(&quiz, sheet);
        let score = if total == 0 {
            0.0
        } else {
            f64::from(earned) / f64::from(total) * 100.0
        };
        let attempt_id = state.next_id();
        let attempt = QuizAttempt::new(
            AttemptId::new(attempt_id),
            id,
            score,
            earned,
            total,
            self.clock.now(),
        )
        .map_err(|err| ApiError::Decode(err.to_string()))?;
        state.attempts.push(attempt.clone());
        Ok(attempt)
    }

    async fn list_my_attempts(&self) -> Result<Vec<QuizAttempt>, ApiError> {
        Ok(self.lock().attempts.clone())
    }
}

#[async_trait]
impl AssignmentGateway for InMemoryGateway {
    async fn list_assignments(&self, course: CourseId) -> Result<Vec<Assignment>, ApiError> {
        Ok(self
            .lock()
            .assignments
            .iter()
            .filter(|assignment| assignment.course_id() == course)
            .cloned()
            .collect())
    }

    async fn list_submissions(&self, assignment: AssignmentId) -> Result<Vec<Submission>, ApiError> {
        Ok(self
            .lock()
            .submissions
            .iter()
            .filter(|submission| submission.assignment_id() == assignment)
            .cloned()
            .collect())
    }

    async fn grade_submission(
        &self,
        id: SubmissionId,
        sheet: &GradeSheet,
    ) -> Result<Submission, ApiError> {
        let mut state = self.lock();
        let submission = state
            .submissions
            .iter_mut()
            .find(|submission| submission.id() == id)
            .ok_or(ApiError::NotFound)?;
        submission.apply_grade(sheet);
        Ok(submission.clone())
    }
}

#[async_trait]
impl AuthGateway for InMemoryGateway {
    async fn login(&self, email: &str, _password: &str) -> Result<String, ApiError> {
        Ok(format!("token-{email}"))
    }
}
