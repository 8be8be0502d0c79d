//! In-memory state for one quiz being taken: answer sheet, navigation,
//! countdown, and the single-submission guard. The session is owned by the
//! quiz view and discarded on navigation away; nothing here touches the
//! network.

use std::collections::BTreeMap;

use thiserror::Error;

use campus_core::model::{OptionId, Question, QuestionId, Quiz, QuizAttempt};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("quiz already submitted")]
    AlreadySubmitted,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No countdown running, or the session is past the point of ticking.
    Idle,
    /// Countdown running; seconds left.
    Running(u32),
    /// The limit was just reached. Emitted exactly once; the caller starts
    /// the automatic submission and stops the timer.
    Expired,
}

/// The answers as they will be sent: one entry per question, in quiz order,
/// unanswered questions carried as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSheet {
    pub entries: Vec<SheetEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    pub question_id: QuestionId,
    pub selected_option_id: Option<OptionId>,
}

#[derive(Debug)]
pub struct QuizSession {
    quiz: Quiz,
    answers: BTreeMap<QuestionId, Option<OptionId>>,
    current: usize,
    remaining_seconds: Option<u32>,
    expired: bool,
    submitting: bool,
    attempt: Option<QuizAttempt>,
}

impl QuizSession {
    /// Start a session for a fetched quiz: every question mapped to no
    /// answer, countdown armed iff the quiz declares a time limit.
    #[must_use]
    pub fn new(quiz: Quiz) -> Self {
        let answers = quiz
            .questions()
            .iter()
            .map(|question| (question.id(), None))
            .collect();
        let remaining_seconds = quiz.time_limit_minutes().map(|minutes| minutes * 60);

        Self {
            quiz,
            answers,
            current: 0,
            remaining_seconds,
            expired: false,
            submitting: false,
            attempt: None,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question currently shown. `current` is kept in bounds by
    /// construction and clamped navigation.
    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.quiz.questions()[self.current]
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.quiz.len()
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.remaining_seconds
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Terminal once the backend accepted the attempt.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.attempt.is_some()
    }

    #[must_use]
    pub fn attempt(&self) -> Option<&QuizAttempt> {
        self.attempt.as_ref()
    }

    #[must_use]
    pub fn selected(&self, question: QuestionId) -> Option<OptionId> {
        self.answers.get(&question).copied().flatten()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.values().filter(|slot| slot.is_some()).count()
    }

    /// Record a choice. Re-selecting overwrites; unknown question ids are
    /// ignored. Answering is never required before navigation or submission.
    pub fn select_option(&mut self, question: QuestionId, option: OptionId) {
        if self.is_finished() {
            return;
        }
        if let Some(slot) = self.answers.get_mut(&question) {
            *slot = Some(option);
        }
    }

    /// Move to the next question; no-op on the last one.
    pub fn next(&mut self) {
        if self.current + 1 < self.quiz.len() {
            self.current += 1;
        }
    }

    /// Move to the previous question; no-op on the first one.
    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Advance the countdown by one second. Only a live session ticks: while
    /// a submission is in flight, after completion, and after the limit has
    /// already fired, this is `Tick::Idle`.
    pub fn tick(&mut self) -> Tick {
        if self.submitting || self.is_finished() || self.expired {
            return Tick::Idle;
        }
        let Some(seconds) = self.remaining_seconds.as_mut() else {
            return Tick::Idle;
        };
        *seconds = seconds.saturating_sub(1);
        if *seconds == 0 {
            self.expired = true;
            Tick::Expired
        } else {
            Tick::Running(*seconds)
        }
    }

    /// Claim the submission slot and take a snapshot of the answers.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when a submission is already in flight or the
    /// quiz was already accepted; callers treat both as a no-op.
    pub fn begin_submit(&mut self) -> Result<AnswerSheet, SessionError> {
        if self.submitting {
            return Err(SessionError::SubmissionInFlight);
        }
        if self.is_finished() {
            return Err(SessionError::AlreadySubmitted);
        }
        self.submitting = true;

        let entries = self
            .quiz
            .questions()
            .iter()
            .map(|question| SheetEntry {
                question_id: question.id(),
                selected_option_id: self.selected(question.id()),
            })
            .collect();
        Ok(AnswerSheet { entries })
    }

    /// Release the slot after a failed submission; the session is active
    /// again and may be retried by a new user action.
    pub fn submission_failed(&mut self) {
        self.submitting = false;
    }

    /// Adopt the backend's attempt record; the session is over.
    pub fn complete(&mut self, attempt: QuizAttempt) {
        self.submitting = false;
        self.attempt = Some(attempt);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::model::{
        AnswerOption, AttemptId, CourseId, QuizId,
    };
    use campus_core::time::fixed_now;

    fn build_quiz(time_limit_minutes: Option<u32>) -> Quiz {
        let questions = (1..=3)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    format!("Question {id}"),
                    10,
                    vec![
                        AnswerOption {
                            id: OptionId::new(id * 10 + 1),
                            text: "A".to_string(),
                            is_correct: None,
                        },
                        AnswerOption {
                            id: OptionId::new(id * 10 + 2),
                            text: "B".to_string(),
                            is_correct: None,
                        },
                    ],
                )
                .unwrap()
            })
            .collect();
        Quiz::new(
            QuizId::new(1),
            CourseId::new(1),
            "Checkpoint",
            time_limit_minutes,
            60.0,
            questions,
        )
        .unwrap()
    }

    fn build_attempt() -> QuizAttempt {
        QuizAttempt::new(AttemptId::new(1), QuizId::new(1), 66.7, 20, 30, fixed_now()).unwrap()
    }

    #[test]
    fn starts_with_all_questions_unanswered() {
        let session = QuizSession::new(build_quiz(None));
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.remaining_seconds(), None);
    }

    #[test]
    fn time_limit_arms_countdown_in_seconds() {
        let session = QuizSession::new(build_quiz(Some(2)));
        assert_eq!(session.remaining_seconds(), Some(120));
    }

    #[test]
    fn reselecting_keeps_only_latest_option() {
        let mut session = QuizSession::new(build_quiz(None));
        let question = QuestionId::new(1);
        session.select_option(question, OptionId::new(11));
        session.select_option(question, OptionId::new(12));
        assert_eq!(session.selected(question), Some(OptionId::new(12)));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn unknown_question_is_ignored() {
        let mut session = QuizSession::new(build_quiz(None));
        session.select_option(QuestionId::new(99), OptionId::new(11));
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn navigation_clamps_at_both_edges() {
        let mut session = QuizSession::new(build_quiz(None));
        session.previous();
        assert_eq!(session.current_index(), 0);

        session.next();
        session.next();
        session.next();
        session.next();
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn tick_counts_down_and_expires_once() {
        let quiz = build_quiz(Some(1));
        let mut session = QuizSession::new(quiz);
        // Drain 59 seconds.
        for expected in (1..60).rev() {
            assert_eq!(session.tick(), Tick::Running(expected));
        }
        assert_eq!(session.tick(), Tick::Expired);
        // A late timer callback must not fire a second automatic submit.
        assert_eq!(session.tick(), Tick::Idle);
    }

    #[test]
    fn tick_is_idle_while_submitting() {
        let mut session = QuizSession::new(build_quiz(Some(1)));
        let _sheet = session.begin_submit().unwrap();
        assert_eq!(session.tick(), Tick::Idle);
        assert_eq!(session.remaining_seconds(), Some(60));
    }

    #[test]
    fn second_begin_submit_is_rejected_while_in_flight() {
        let mut session = QuizSession::new(build_quiz(None));
        let _sheet = session.begin_submit().unwrap();
        assert_eq!(
            session.begin_submit().unwrap_err(),
            SessionError::SubmissionInFlight
        );
    }

    #[test]
    fn failed_submission_reopens_the_session() {
        let mut session = QuizSession::new(build_quiz(None));
        let _sheet = session.begin_submit().unwrap();
        session.submission_failed();
        assert!(!session.is_submitting());
        assert!(session.begin_submit().is_ok());
    }

    #[test]
    fn completed_session_refuses_resubmission() {
        let mut session = QuizSession::new(build_quiz(None));
        let _sheet = session.begin_submit().unwrap();
        session.complete(build_attempt());
        assert!(session.is_finished());
        assert_eq!(
            session.begin_submit().unwrap_err(),
            SessionError::AlreadySubmitted
        );
    }

    #[test]
    fn sheet_lists_every_question_in_quiz_order() {
        let mut session = QuizSession::new(build_quiz(None));
        session.select_option(QuestionId::new(2), OptionId::new(22));
        let sheet = session.begin_submit().unwrap();

        let ids: Vec<_> = sheet.entries.iter().map(|e| e.question_id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(sheet.entries[0].selected_option_id, None);
        assert_eq!(sheet.entries[1].selected_option_id, Some(OptionId::new(22)));
    }

    #[test]
    fn selection_after_completion_is_ignored() {
        let mut session = QuizSession::new(build_quiz(None));
        let _sheet = session.begin_submit().unwrap();
        session.complete(build_attempt());
        session.select_option(QuestionId::new(1), OptionId::new(11));
        assert_eq!(session.answered_count(), 0);
    }
}
