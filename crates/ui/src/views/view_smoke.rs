use std::sync::Arc;

use async_trait::async_trait;

use campus_core::model::{
    AnswerOption, Course, CourseId, CourseReview, CourseStatus, Enrollment, EnrollmentId, Lesson,
    NewCourse, OptionId, Question, QuestionId, Quiz, QuizId, StudentId,
};
use campus_core::time::fixed_now;
use services::api::{CourseGateway, InMemoryGateway};
use services::{ApiError, CatalogService};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_catalog};

fn build_course(id: u64, title: &str, category: &str) -> Course {
    Course::new(
        CourseId::new(id),
        title,
        "About",
        "Ada Lovelace",
        category,
        CourseStatus::Published,
        Some(4.5),
        fixed_now(),
    )
    .unwrap()
}

fn build_quiz(id: u64, time_limit_minutes: Option<u32>) -> Quiz {
    let questions = (1..=2)
        .map(|qid| {
            Question::new(
                QuestionId::new(qid),
                format!("What is {qid} + {qid}?"),
                10,
                vec![
                    AnswerOption {
                        id: OptionId::new(qid * 10 + 1),
                        text: "Three".to_string(),
                        is_correct: Some(false),
                    },
                    AnswerOption {
                        id: OptionId::new(qid * 10 + 2),
                        text: "Four".to_string(),
                        is_correct: Some(true),
                    },
                ],
            )
            .unwrap()
        })
        .collect();
    Quiz::new(
        QuizId::new(id),
        CourseId::new(1),
        "Unit Checkpoint",
        time_limit_minutes,
        60.0,
        questions,
    )
    .unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_renders_catalog_rows() {
    let gateway = InMemoryGateway::new();
    gateway.push_course(build_course(1, "Algebra I", "Math"));
    gateway.push_course(build_course(2, "Biology Basics", "Science"));

    let mut harness = setup_view_harness(ViewKind::Courses, gateway).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Algebra I"), "missing course title in {html}");
    assert!(html.contains("Biology Basics"), "missing course title in {html}");
    assert!(html.contains("Ada Lovelace"), "missing instructor in {html}");
}

struct FailingCourseGateway;

#[async_trait]
impl CourseGateway for FailingCourseGateway {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        Err(ApiError::Decode("backend unavailable".to_string()))
    }

    async fn get_course(&self, _id: CourseId) -> Result<Course, ApiError> {
        Err(ApiError::Decode("backend unavailable".to_string()))
    }

    async fn list_lessons(&self, _course: CourseId) -> Result<Vec<Lesson>, ApiError> {
        Err(ApiError::Decode("backend unavailable".to_string()))
    }

    async fn list_reviews(&self, _course: CourseId) -> Result<Vec<CourseReview>, ApiError> {
        Err(ApiError::Decode("backend unavailable".to_string()))
    }

    async fn create_course(&self, _new_course: &NewCourse) -> Result<Course, ApiError> {
        Err(ApiError::Decode("backend unavailable".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn courses_view_renders_error_state_with_retry() {
    let gateway = InMemoryGateway::new();
    let catalog = Arc::new(CatalogService::new(
        Arc::new(FailingCourseGateway),
        Arc::new(gateway.clone()),
    ));

    let mut harness = setup_view_harness_with_catalog(ViewKind::Courses, gateway, catalog).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Something went wrong"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_question_and_countdown() {
    let gateway = InMemoryGateway::new();
    gateway.push_quiz(build_quiz(7, Some(1)));
    gateway.push_enrollment(Enrollment {
        id: EnrollmentId::new(1),
        course_id: CourseId::new(1),
        student_id: StudentId::new(1),
        enrolled_at: fixed_now(),
        progress_percent: 0.0,
    });

    let mut harness = setup_view_harness(ViewKind::Quiz(7), gateway).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Unit Checkpoint"), "missing title in {html}");
    assert!(
        html.contains("Question 1 of 2"),
        "missing progress in {html}"
    );
    assert!(html.contains("Time: 1:00"), "missing countdown in {html}");
    assert!(html.contains("0 of 2 answered"), "missing tally in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_dedicated_not_found_state() {
    let gateway = InMemoryGateway::new();

    let mut harness = setup_view_harness(ViewKind::Quiz(404), gateway).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Quiz not found"), "missing state in {html}");
    assert!(
        html.contains("Back to courses"),
        "missing back link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_renders_empty_dashboard_hints() {
    let gateway = InMemoryGateway::new();

    let mut harness = setup_view_harness(ViewKind::Home, gateway).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Not enrolled in any course yet"),
        "missing enrollment hint in {html}"
    );
    assert!(html.contains("No attempts yet"), "missing attempts hint in {html}");
}
