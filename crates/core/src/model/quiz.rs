use thiserror::Error;

use crate::model::ids::{CourseId, OptionId, QuestionId, QuizId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("quiz has no questions")]
    NoQuestions,

    #[error("passing score must be between 0 and 100")]
    InvalidPassingScore,

    #[error(transparent)]
    Question(#[from] QuestionError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question needs at least two options, got {len}")]
    NotEnoughOptions { len: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One selectable answer. `is_correct` is absent until the backend chooses to
/// reveal it (never before the student has submitted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
    pub is_correct: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    points: u32,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Build a question from backend data.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` for blank text and
    /// `QuestionError::NotEnoughOptions` when fewer than two options exist.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        points: u32,
        options: Vec<AnswerOption>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.len() < 2 {
            return Err(QuestionError::NotEnoughOptions { len: options.len() });
        }

        Ok(Self {
            id,
            text,
            points,
            options,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Look up an option of this question by id.
    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id == id)
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// A quiz as fetched for taking: an ordered list of questions plus the
/// grading threshold and an optional time limit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    id: QuizId,
    course_id: CourseId,
    title: String,
    time_limit_minutes: Option<u32>,
    passing_score: f64,
    questions: Vec<Question>,
}

impl Quiz {
    /// Build a quiz from backend data.
    ///
    /// # Errors
    ///
    /// Returns `QuizError` when the title is blank, the question list is
    /// empty, or the passing score falls outside 0..=100.
    pub fn new(
        id: QuizId,
        course_id: CourseId,
        title: impl Into<String>,
        time_limit_minutes: Option<u32>,
        passing_score: f64,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        if !(0.0..=100.0).contains(&passing_score) {
            return Err(QuizError::InvalidPassingScore);
        }

        Ok(Self {
            id,
            course_id,
            title,
            time_limit_minutes,
            passing_score,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
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
    pub fn time_limit_minutes(&self) -> Option<u32> {
        self.time_limit_minutes
    }

    #[must_use]
    pub fn passing_score(&self) -> f64 {
        self.passing_score
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by id.
    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Whether a score meets the passing threshold. The boundary is
    /// inclusive: a score exactly equal to the threshold passes.
    #[must_use]
    pub fn is_passing(&self, score: f64) -> bool {
        score >= self.passing_score
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn build_question(id: u64, text: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            text,
            10,
            vec![
                AnswerOption {
                    id: OptionId::new(id * 10 + 1),
                    text: "First".to_string(),
                    is_correct: None,
                },
                AnswerOption {
                    id: OptionId::new(id * 10 + 2),
                    text: "Second".to_string(),
                    is_correct: None,
                },
            ],
        )
        .unwrap()
    }

    pub(crate) fn build_quiz(passing_score: f64, time_limit_minutes: Option<u32>) -> Quiz {
        Quiz::new(
            QuizId::new(1),
            CourseId::new(1),
            "Checkpoint",
            time_limit_minutes,
            passing_score,
            vec![build_question(1, "Q1"), build_question(2, "Q2")],
        )
        .unwrap()
    }

    #[test]
    fn question_requires_two_options() {
        let err = Question::new(QuestionId::new(1), "Q", 5, Vec::new()).unwrap_err();
        assert_eq!(err, QuestionError::NotEnoughOptions { len: 0 });
    }

    #[test]
    fn quiz_requires_questions() {
        let err = Quiz::new(
            QuizId::new(1),
            CourseId::new(1),
            "Checkpoint",
            None,
            60.0,
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, QuizError::NoQuestions);
    }

    #[test]
    fn quiz_rejects_bad_passing_score() {
        let err = Quiz::new(
            QuizId::new(1),
            CourseId::new(1),
            "Checkpoint",
            None,
            120.0,
            vec![build_question(1, "Q1"), build_question(2, "Q2")],
        )
        .unwrap_err();
        assert_eq!(err, QuizError::InvalidPassingScore);
    }

    #[test]
    fn passing_boundary_is_inclusive() {
        let quiz = build_quiz(60.0, None);
        assert!(!quiz.is_passing(59.9));
        assert!(quiz.is_passing(60.0));
        assert!(quiz.is_passing(60.1));
    }

    #[test]
    fn question_lookup_is_by_id() {
        let quiz = build_quiz(60.0, None);
        assert_eq!(
            quiz.question(QuestionId::new(2)).map(Question::text),
            Some("Q2")
        );
        assert!(quiz.question(QuestionId::new(99)).is_none());
    }
}
