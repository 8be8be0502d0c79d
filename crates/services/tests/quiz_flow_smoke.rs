use std::sync::Arc;

use campus_core::model::{
    AnswerOption, CourseId, OptionId, Question, QuestionId, Quiz, QuizId,
};
use campus_core::time::fixed_clock;
use services::api::InMemoryGateway;
use services::{QuizFlowService, SubmitOutcome, Tick};

fn build_quiz(time_limit_minutes: Option<u32>) -> Quiz {
    let questions = (1..=2)
        .map(|id| {
            Question::new(
                QuestionId::new(id),
                format!("Q{id}"),
                10,
                vec![
                    AnswerOption {
                        id: OptionId::new(id * 10 + 1),
                        text: "right".to_string(),
                        is_correct: Some(true),
                    },
                    AnswerOption {
                        id: OptionId::new(id * 10 + 2),
                        text: "wrong".to_string(),
                        is_correct: Some(false),
                    },
                ],
            )
            .unwrap()
        })
        .collect();
    Quiz::new(
        QuizId::new(1),
        CourseId::new(1),
        "Smoke Quiz",
        time_limit_minutes,
        60.0,
        questions,
    )
    .unwrap()
}

fn service(gateway: &InMemoryGateway) -> QuizFlowService {
    QuizFlowService::new(Arc::new(gateway.clone()), Arc::new(gateway.clone()))
}

#[tokio::test]
async fn answered_session_submits_and_grades() {
    let gateway = InMemoryGateway::new().with_clock(fixed_clock());
    gateway.push_quiz(build_quiz(None));
    let flow = service(&gateway);
    flow.enroll(CourseId::new(1)).await.unwrap();

    let mut session = flow.start(QuizId::new(1)).await.unwrap();
    session.select_option(QuestionId::new(1), OptionId::new(11));
    session.select_option(QuestionId::new(2), OptionId::new(22));

    let attempt = match flow.submit(&mut session).await.unwrap() {
        SubmitOutcome::Completed(attempt) => attempt,
        other => panic!("expected completion, got {other:?}"),
    };
    assert!((attempt.score() - 50.0).abs() < f64::EPSILON);
    assert!(!attempt.passed(session.quiz().passing_score()));
    assert!(session.is_finished());
}

#[tokio::test]
async fn duplicate_submit_sends_exactly_one_request() {
    let gateway = InMemoryGateway::new().with_clock(fixed_clock());
    gateway.push_quiz(build_quiz(None));
    let flow = service(&gateway);
    flow.enroll(CourseId::new(1)).await.unwrap();

    let mut session = flow.start(QuizId::new(1)).await.unwrap();
    let first = flow.submit(&mut session).await.unwrap();
    assert!(matches!(first, SubmitOutcome::Completed(_)));

    // The session is finished; a second submit must be a no-op.
    let second = flow.submit(&mut session).await.unwrap();
    assert!(matches!(second, SubmitOutcome::Ignored));
    assert_eq!(gateway.submit_call_count(), 1);
}

#[tokio::test]
async fn timeout_drives_a_single_automatic_submission() {
    let gateway = InMemoryGateway::new().with_clock(fixed_clock());
    gateway.push_quiz(build_quiz(Some(1)));
    let flow = service(&gateway);
    flow.enroll(CourseId::new(1)).await.unwrap();

    let mut session = flow.start(QuizId::new(1)).await.unwrap();
    let mut expirations = 0;
    for _ in 0..65 {
        if session.tick() == Tick::Expired {
            expirations += 1;
            let outcome = flow.submit(&mut session).await.unwrap();
            assert!(matches!(outcome, SubmitOutcome::Completed(_)));
        }
    }

    assert_eq!(expirations, 1);
    assert_eq!(gateway.submit_call_count(), 1);
}

#[tokio::test]
async fn not_enrolled_submission_recovers_after_enrolling() {
    let gateway = InMemoryGateway::new().with_clock(fixed_clock());
    gateway.push_quiz(build_quiz(None));
    let flow = service(&gateway);

    let mut session = flow.start(QuizId::new(1)).await.unwrap();
    session.select_option(QuestionId::new(1), OptionId::new(11));

    let outcome = flow.submit(&mut session).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::NotEnrolled));
    assert!(!session.is_finished());
    assert!(!session.is_submitting());

    // The recovery path: enroll, then resubmit the same session.
    flow.enroll(CourseId::new(1)).await.unwrap();
    let outcome = flow.submit(&mut session).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Completed(_)));
    assert_eq!(gateway.submit_call_count(), 2);
}

#[tokio::test]
async fn backend_failure_reopens_the_session_for_retry() {
    let gateway = InMemoryGateway::new().with_clock(fixed_clock());
    gateway.push_quiz(build_quiz(None));
    let flow = service(&gateway);
    flow.enroll(CourseId::new(1)).await.unwrap();

    let mut session = flow.start(QuizId::new(1)).await.unwrap();
    gateway.fail_next_submit();

    let err = flow.submit(&mut session).await.unwrap_err();
    assert!(matches!(err, services::QuizFlowError::Api(_)));
    assert!(!session.is_submitting());

    // A fresh user action retries successfully.
    let outcome = flow.submit(&mut session).await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Completed(_)));
}

#[tokio::test]
async fn unknown_quiz_is_a_distinct_not_found() {
    let gateway = InMemoryGateway::new();
    let flow = service(&gateway);
    let err = flow.start(QuizId::new(404)).await.unwrap_err();
    assert!(matches!(
        err,
        services::QuizFlowError::Api(services::ApiError::NotFound)
    ));
}
