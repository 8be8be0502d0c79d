use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error type for parsing an id from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new id from its backend integer value.
            #[must_use]
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the underlying u64 value.
            #[must_use]
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<u64>().map($name::new).map_err(|_| ParseIdError {
                    kind: stringify!($name),
                })
            }
        }
    };
}

id_type!(
    /// Unique identifier for a Course
    CourseId
);
id_type!(
    /// Unique identifier for a Lesson
    LessonId
);
id_type!(
    /// Unique identifier for a Quiz
    QuizId
);
id_type!(
    /// Unique identifier for a quiz Question
    QuestionId
);
id_type!(
    /// Unique identifier for an answer Option within a question
    OptionId
);
id_type!(
    /// Unique identifier for an Assignment
    AssignmentId
);
id_type!(
    /// Unique identifier for a Submission
    SubmissionId
);
id_type!(
    /// Unique identifier for a student account
    StudentId
);
id_type!(
    /// Unique identifier for a quiz Attempt
    AttemptId
);
id_type!(
    /// Unique identifier for an Enrollment
    EnrollmentId
);

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_id_display() {
        let id = CourseId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn course_id_from_str() {
        let id: CourseId = "123".parse().unwrap();
        assert_eq!(id, CourseId::new(123));
    }

    #[test]
    fn course_id_from_str_invalid() {
        let result = "not-a-number".parse::<CourseId>();
        assert!(result.is_err());
    }

    #[test]
    fn quiz_id_debug_names_type() {
        let id = QuizId::new(7);
        assert_eq!(format!("{id:?}"), "QuizId(7)");
    }

    #[test]
    fn id_roundtrip() {
        let original = SubmissionId::new(42);
        let serialized = original.to_string();
        let deserialized: SubmissionId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
