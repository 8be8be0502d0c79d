use campus_core::model::{Quiz, QuizAttempt};

/// Countdown label ("Time: 4:05").
#[must_use]
pub fn format_timer(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("Time: {minutes}:{remainder:02}")
}

/// Position label ("Question 3 of 10").
#[must_use]
pub fn progress_label(index: usize, total: usize) -> String {
    format!("Question {} of {total}", index + 1)
}

/// Verdict label for a graded attempt against its quiz's threshold.
#[must_use]
pub fn verdict_label(quiz: &Quiz, attempt: &QuizAttempt) -> &'static str {
    if quiz.is_passing(attempt.score()) {
        "Passed"
    } else {
        "Not passed"
    }
}

/// Score line for the results pane ("67%, 20 of 30 points").
#[must_use]
pub fn score_label(attempt: &QuizAttempt) -> String {
    format!(
        "{:.0}%, {} of {} points",
        attempt.score(),
        attempt.earned_points(),
        attempt.total_points()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::model::{
        AnswerOption, AttemptId, CourseId, OptionId, Question, QuestionId, QuizId,
    };
    use campus_core::time::fixed_now;

    fn build_quiz(passing_score: f64) -> Quiz {
        let options = vec![
            AnswerOption {
                id: OptionId::new(1),
                text: "A".to_string(),
                is_correct: None,
            },
            AnswerOption {
                id: OptionId::new(2),
                text: "B".to_string(),
                is_correct: None,
            },
        ];
        Quiz::new(
            QuizId::new(1),
            CourseId::new(1),
            "Checkpoint",
            None,
            passing_score,
            vec![Question::new(QuestionId::new(1), "Q", 10, options).unwrap()],
        )
        .unwrap()
    }

    fn build_attempt(score: f64) -> QuizAttempt {
        QuizAttempt::new(AttemptId::new(1), QuizId::new(1), score, 0, 10, fixed_now()).unwrap()
    }

    #[test]
    fn timer_pads_seconds() {
        assert_eq!(format_timer(245), "Time: 4:05");
        assert_eq!(format_timer(60), "Time: 1:00");
        assert_eq!(format_timer(9), "Time: 0:09");
    }

    #[test]
    fn progress_is_one_based() {
        assert_eq!(progress_label(0, 10), "Question 1 of 10");
        assert_eq!(progress_label(9, 10), "Question 10 of 10");
    }

    #[test]
    fn verdict_boundary_is_inclusive() {
        let quiz = build_quiz(60.0);
        assert_eq!(verdict_label(&quiz, &build_attempt(59.9)), "Not passed");
        assert_eq!(verdict_label(&quiz, &build_attempt(60.0)), "Passed");
    }
}
