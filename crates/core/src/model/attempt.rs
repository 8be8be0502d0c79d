use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::{AttemptId, QuizId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("attempt score must be between 0 and 100")]
    InvalidScore,
}

/// A graded quiz attempt as returned by the submit endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAttempt {
    id: AttemptId,
    quiz_id: QuizId,
    score: f64,
    earned_points: u32,
    total_points: u32,
    completed_at: DateTime<Utc>,
}

impl QuizAttempt {
    /// Build an attempt record from backend data.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::InvalidScore` when the score percentage is
    /// outside 0..=100.
    pub fn new(
        id: AttemptId,
        quiz_id: QuizId,
        score: f64,
        earned_points: u32,
        total_points: u32,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, AttemptError> {
        if !(0.0..=100.0).contains(&score) {
            return Err(AttemptError::InvalidScore);
        }

        Ok(Self {
            id,
            quiz_id,
            score,
            earned_points,
            total_points,
            completed_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> AttemptId {
        self.id
    }

    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.quiz_id
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    #[must_use]
    pub fn earned_points(&self) -> u32 {
        self.earned_points
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Whether this attempt meets a passing threshold, inclusive at the
    /// boundary.
    #[must_use]
    pub fn passed(&self, passing_score: f64) -> bool {
        self.score >= passing_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn build(score: f64) -> QuizAttempt {
        QuizAttempt::new(AttemptId::new(1), QuizId::new(1), score, 6, 10, fixed_now()).unwrap()
    }

    #[test]
    fn rejects_score_above_hundred() {
        let err =
            QuizAttempt::new(AttemptId::new(1), QuizId::new(1), 100.5, 11, 10, fixed_now())
                .unwrap_err();
        assert_eq!(err, AttemptError::InvalidScore);
    }

    #[test]
    fn passing_is_inclusive_at_boundary() {
        assert!(!build(59.9).passed(60.0));
        assert!(build(60.0).passed(60.0));
    }
}
